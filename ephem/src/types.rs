//! Domain symbols and their engine codes.
//!
//! Every symbol set is a closed enum. Translation to engine codes is an
//! exhaustive `match`, so adding a variant without a code does not compile.
//! Parsing a label that is not in the set fails before any engine call.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

define_symbol_enum! {
    /// Celestial body known to the chart layer
    Body, unknown = UnknownBody {
        Sun => "Sun",
        Moon => "Moon",
        Mercury => "Mercury",
        Venus => "Venus",
        Mars => "Mars",
        Jupiter => "Jupiter",
        Saturn => "Saturn",
        Uranus => "Uranus",
        Neptune => "Neptune",
        Pluto => "Pluto",
        /// Mean lunar north node
        NorthNode => "North Node",
        Chiron => "Chiron",
        Pholus => "Pholus",
        Ceres => "Ceres",
        Pallas => "Pallas",
        Juno => "Juno",
        Vesta => "Vesta",
    }
}

impl Body {
    /// Engine body number
    pub fn code(&self) -> i32 {
        match self {
            Body::Sun => 0,
            Body::Moon => 1,
            Body::Mercury => 2,
            Body::Venus => 3,
            Body::Mars => 4,
            Body::Jupiter => 5,
            Body::Saturn => 6,
            Body::Uranus => 7,
            Body::Neptune => 8,
            Body::Pluto => 9,
            Body::NorthNode => 10,
            Body::Chiron => 15,
            Body::Pholus => 16,
            Body::Ceres => 17,
            Body::Pallas => 18,
            Body::Juno => 19,
            Body::Vesta => 20,
        }
    }
}

define_symbol_enum! {
    /// House division algorithm
    HouseSystem, unknown = UnknownHouseSystem {
        Placidus => "Placidus",
        Koch => "Koch",
        Porphyrius => "Porphyrius",
        Regiomontanus => "Regiomontanus",
        Campanus => "Campanus",
        /// Equal houses from the Ascendant
        Equal => "Equal",
        /// Equal houses, alternate engine code
        Equal2 => "Equal 2",
        VehlowEqual => "Vehlow Equal",
        WholeSign => "Whole Sign",
        Meridian => "Meridian",
        Azimuthal => "Azimuthal",
        PolichPage => "Polich Page",
        Alcabitus => "Alcabitus",
        Morinus => "Morinus",
    }
}

impl HouseSystem {
    /// Single-byte engine code
    pub fn code(&self) -> u8 {
        match self {
            HouseSystem::Placidus => b'P',
            HouseSystem::Koch => b'K',
            HouseSystem::Porphyrius => b'O',
            HouseSystem::Regiomontanus => b'R',
            HouseSystem::Campanus => b'C',
            HouseSystem::Equal => b'A',
            HouseSystem::Equal2 => b'E',
            HouseSystem::VehlowEqual => b'V',
            HouseSystem::WholeSign => b'W',
            HouseSystem::Meridian => b'X',
            HouseSystem::Azimuthal => b'H',
            HouseSystem::PolichPage => b'T',
            HouseSystem::Alcabitus => b'B',
            HouseSystem::Morinus => b'M',
        }
    }
}

define_symbol_enum! {
    /// The twelve houses in chart order
    HouseId, unknown = InvalidInput {
        House1 => "House1",
        House2 => "House2",
        House3 => "House3",
        House4 => "House4",
        House5 => "House5",
        House6 => "House6",
        House7 => "House7",
        House8 => "House8",
        House9 => "House9",
        House10 => "House10",
        House11 => "House11",
        House12 => "House12",
    }
}

define_symbol_enum! {
    /// Chart angles, in output order
    AngleId, unknown = InvalidInput {
        /// Ascendant
        Asc => "Asc",
        /// Midheaven
        Mc => "MC",
        /// Descendant, opposite the Ascendant
        Desc => "Desc",
        /// Imum Coeli, opposite the Midheaven
        Ic => "IC",
    }
}

define_symbol_enum! {
    /// Which horizon crossing a transit search looks for
    TransitEvent, unknown = UnknownTransitFlag {
        Rise => "RISE",
        Set => "SET",
    }
}

impl TransitEvent {
    /// Lenient flag parsing: exactly `"RISE"` selects [`TransitEvent::Rise`],
    /// every other value selects [`TransitEvent::Set`].
    ///
    /// Use `str::parse` instead to reject unknown flags.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "RISE" => TransitEvent::Rise,
            "SET" => TransitEvent::Set,
            other => {
                log::warn!("unknown transit flag {:?}, searching for SET", other);
                TransitEvent::Set
            }
        }
    }

    /// Engine rise/set selector
    pub fn code(&self) -> i32 {
        match self {
            TransitEvent::Rise => 1,
            TransitEvent::Set => 2,
        }
    }
}

define_symbol_enum! {
    /// Ayanamsa used when [`CalcFlags::SIDEREAL`] is set
    SiderealMode, unknown = InvalidInput {
        FaganBradley => "fagan_bradley",
        Lahiri => "lahiri",
        DeLuce => "deluce",
        Raman => "raman",
        Ushashashi => "ushashashi",
        Krishnamurti => "krishnamurti",
        DjwhalKhul => "djwhal_khul",
        Yukteshwar => "yukteshwar",
        JnBhasin => "jn_bhasin",
    }
}

impl SiderealMode {
    /// Engine sidereal mode number
    pub fn code(&self) -> i32 {
        match self {
            SiderealMode::FaganBradley => 0,
            SiderealMode::Lahiri => 1,
            SiderealMode::DeLuce => 2,
            SiderealMode::Raman => 3,
            SiderealMode::Ushashashi => 4,
            SiderealMode::Krishnamurti => 5,
            SiderealMode::DjwhalKhul => 6,
            SiderealMode::Yukteshwar => 7,
            SiderealMode::JnBhasin => 8,
        }
    }
}

bitflags! {
    /// Engine computation flags.
    ///
    /// Bits outside the named set are kept as given and passed to the engine
    /// unchanged; build those with [`CalcFlags::from_bits_retain`].
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct CalcFlags: i32 {
        const SWIEPH        = 2;
        const MOSEPH        = 4;
        const HELIOCENTRIC  = 8;
        const TRUE_POSITION = 16;
        const J2000         = 32;
        const NO_NUTATION   = 64;
        /// Fill in longitude and latitude speeds
        const SPEED         = 256;
        const NO_DEFLECTION = 512;
        const NO_ABERRATION = 1024;
        const EQUATORIAL    = 2048;
        const BARYCENTRIC   = 16384;
        const TOPOCENTRIC   = 32768;
        /// Sidereal zodiac, using the configured [`SiderealMode`]
        const SIDEREAL      = 65536;
    }
}

impl CalcFlags {
    /// Engine defaults
    pub const NONE: Self = Self::empty();
}

impl Serialize for CalcFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CalcFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(CalcFlags::from_bits_retain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_body_codes_are_unique() {
        let codes: HashSet<i32> = Body::ALL.iter().map(Body::code).collect();
        assert_eq!(codes.len(), Body::ALL.len());
        assert!(Body::ALL.iter().all(|b| b.code() >= 0));
    }

    #[test]
    fn test_body_lookup_is_deterministic() {
        for body in Body::ALL {
            let parsed: Body = body.as_str().parse().unwrap();
            assert_eq!(parsed, *body);
            assert_eq!(parsed.code(), body.code());
        }
        assert_eq!("North Node".parse::<Body>().unwrap().code(), 10);
        assert_eq!("Chiron".parse::<Body>().unwrap().code(), 15);
    }

    #[test]
    fn test_unknown_body_fails_the_same_way() {
        for _ in 0..3 {
            let err = "Lilith".parse::<Body>().unwrap_err();
            assert_eq!(err, Error::UnknownBody("Lilith".into()));
        }
        // no case folding
        assert!("sun".parse::<Body>().is_err());
    }

    #[test]
    fn test_house_system_codes() {
        assert_eq!(HouseSystem::Placidus.code(), b'P');
        assert_eq!(HouseSystem::WholeSign.code(), b'W');
        assert_eq!(HouseSystem::Equal.code(), b'A');
        assert_eq!(HouseSystem::Equal2.code(), b'E');
        assert_eq!(HouseSystem::ALL.len(), 14);

        let codes: HashSet<u8> = HouseSystem::ALL.iter().map(HouseSystem::code).collect();
        assert_eq!(codes.len(), HouseSystem::ALL.len());
    }

    #[test]
    fn test_house_system_lookup_is_deterministic() {
        for hsys in HouseSystem::ALL {
            let parsed: HouseSystem = hsys.as_str().parse().unwrap();
            assert_eq!(parsed, *hsys);
            assert_eq!(parsed.code(), hsys.code());
        }
        for label in ["Polich Page", "Vehlow Equal", "Equal 2", "Whole Sign"] {
            assert!(label.parse::<HouseSystem>().is_ok(), "{}", label);
        }
    }

    #[test]
    fn test_unknown_house_system() {
        let err = "Topocentric".parse::<HouseSystem>().unwrap_err();
        assert_eq!(err, Error::UnknownHouseSystem("Topocentric".into()));
    }

    #[test]
    fn test_house_and_angle_order() {
        assert_eq!(HouseId::ALL.len(), 12);
        assert_eq!(HouseId::ALL[0], HouseId::House1);
        assert_eq!(HouseId::ALL[11].as_str(), "House12");
        let labels: Vec<&str> = AngleId::ALL.iter().map(AngleId::as_str).collect();
        assert_eq!(labels, ["Asc", "MC", "Desc", "IC"]);
    }

    #[test]
    fn test_transit_flag_lenient() {
        assert_eq!(TransitEvent::from_flag("RISE"), TransitEvent::Rise);
        assert_eq!(TransitEvent::from_flag("SET"), TransitEvent::Set);
        assert_eq!(TransitEvent::from_flag("rise"), TransitEvent::Set);
        assert_eq!(TransitEvent::from_flag("SOMETHING"), TransitEvent::Set);
    }

    #[test]
    fn test_transit_flag_strict() {
        assert_eq!("RISE".parse::<TransitEvent>().unwrap(), TransitEvent::Rise);
        assert_eq!(
            "DUSK".parse::<TransitEvent>().unwrap_err(),
            Error::UnknownTransitFlag("DUSK".into())
        );
    }

    #[test]
    fn test_calc_flags_compose() {
        let flags = CalcFlags::SWIEPH | CalcFlags::SPEED;
        assert_eq!(flags.bits(), 258);
        assert!(flags.contains(CalcFlags::SPEED));
        assert!(!flags.contains(CalcFlags::SIDEREAL));

        let mut flags = CalcFlags::NONE;
        flags |= CalcFlags::SIDEREAL;
        assert_eq!(flags.bits(), 65536);
    }

    #[test]
    fn test_calc_flags_keep_unnamed_bits() {
        // JPL ephemeris (1) and radians (8192) have no named constant
        let flags = CalcFlags::from_bits_retain(1 | 8192) | CalcFlags::SPEED;
        assert_eq!(flags.bits(), 1 | 8192 | 256);

        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, "8449");
        let back: CalcFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bits(), 8449);
        assert_eq!(CalcFlags::NONE.bits(), 0);
    }

    #[test]
    fn test_serde_uses_labels() {
        let label = serde_json::to_string(&Body::NorthNode).unwrap();
        assert_eq!(label, "\"North Node\"");
        assert_eq!(serde_json::to_string(&AngleId::Mc).unwrap(), "\"MC\"");
        let mode: SiderealMode = serde_json::from_str("\"lahiri\"").unwrap();
        assert_eq!(mode.code(), 1);
    }

    #[cfg(feature = "swisseph")]
    #[test]
    fn test_codes_match_native_constants() {
        use sweph_sys as ffi;

        assert_eq!(Body::Sun.code(), ffi::SE_SUN);
        assert_eq!(Body::NorthNode.code(), ffi::SE_MEAN_NODE);
        assert_eq!(Body::Chiron.code(), ffi::SE_CHIRON);
        assert_eq!(Body::Vesta.code(), ffi::SE_VESTA);
        assert_eq!(TransitEvent::Rise.code(), ffi::SE_CALC_RISE);
        assert_eq!(TransitEvent::Set.code(), ffi::SE_CALC_SET);
        assert_eq!(CalcFlags::SIDEREAL.bits(), ffi::SEFLG_SIDEREAL);
        assert_eq!(CalcFlags::TOPOCENTRIC.bits(), ffi::SEFLG_TOPOCTR);
        assert_eq!(SiderealMode::Lahiri.code(), ffi::SE_SIDM_LAHIRI);
    }

    proptest! {
        #[test]
        fn prop_unknown_body_fails_the_same_way(label in "\\PC{0,24}") {
            prop_assume!(Body::ALL.iter().all(|b| b.as_str() != label));
            let first = label.parse::<Body>().unwrap_err();
            let second = label.parse::<Body>().unwrap_err();
            prop_assert_eq!(&first, &Error::UnknownBody(label.clone()));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_unknown_house_system_fails_the_same_way(label in "\\PC{0,24}") {
            prop_assume!(HouseSystem::ALL.iter().all(|h| h.as_str() != label));
            let first = label.parse::<HouseSystem>().unwrap_err();
            let second = label.parse::<HouseSystem>().unwrap_err();
            prop_assert_eq!(&first, &Error::UnknownHouseSystem(label.clone()));
            prop_assert_eq!(first, second);
        }
    }
}
