//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. That is, each class has its own separate
    /// record tree starting at the root. However, in practice, only the IN
    /// class is really relevant.
    ///
    /// In addition, there are query classes or QCLASSes that are only
    /// meaningful in the question section of a query, most importantly the
    /// wildcard class ANY.
    ///
    /// Classes are represented by a 16 bit value which this type wraps. The
    /// values assigned in section 3.2.4 of [RFC 1035], plus the query class
    /// ANY from section 3.2.5, are available as associated constants.
    /// Formatting a value outside this set falls back to the plain decimal
    /// representation of the raw value, so every class has a printable
    /// name.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    =>
    Class, u16;

    /// Internet (IN).
    ///
    /// This class is defined in RFC 1035 and really the only one relevant
    /// at all.
    (IN => 1, "IN")

    /// CSNET (CS, obsolete).
    ///
    /// The class of the CSNET network, retained only for examples in
    /// obsolete specifications.
    (CS => 2, "CS")

    /// Chaosnet (CH).
    ///
    /// A network protocol developed at MIT in the 1970s. Reused by BIND for
    /// built-in server information zones.
    (CH => 3, "CH")

    /// Hesiod (HS).
    ///
    /// A system information protocol part of MIT's Project Athena.
    (HS => 4, "HS")

    /// Query class ANY.
    ///
    /// This class can be used in a query to indicate that records for the
    /// given name from any class are requested.
    (ANY => 0xFF, "ANY")
}

int_enum_str_with_decimal!(Class, u16, "unknown class");

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::Class;

    #[test]
    fn class_codes() {
        assert_eq!(Class::IN.to_int(), 1);
        assert_eq!(Class::CS.to_int(), 2);
        assert_eq!(Class::CH.to_int(), 3);
        assert_eq!(Class::HS.to_int(), 4);
        assert_eq!(Class::ANY.to_int(), 255);
    }

    #[test]
    fn well_known_codes() {
        // The five assigned codes are the only ones with a mnemonic.
        let mut known = (0..=u16::MAX)
            .filter(|code| Class::from_int(*code).to_mnemonic().is_some());
        assert_eq!(known.next(), Some(1));
        assert_eq!(known.next(), Some(2));
        assert_eq!(known.next(), Some(3));
        assert_eq!(known.next(), Some(4));
        assert_eq!(known.next(), Some(255));
        assert_eq!(known.next(), None);
    }

    #[test]
    fn mnemonic_round_trip() {
        for class in
            [Class::IN, Class::CS, Class::CH, Class::HS, Class::ANY]
        {
            assert_eq!(
                Class::from_mnemonic(class.to_mnemonic().unwrap()),
                Some(class)
            );
        }
    }

    #[test]
    fn from_str() {
        use core::str::FromStr;

        assert_eq!(Class::from_str("IN").unwrap(), Class::IN);
        assert_eq!(Class::from_str("hs").unwrap(), Class::HS);
        assert_eq!(Class::from_str("Any").unwrap(), Class::ANY);
        assert_eq!(Class::from_str("255").unwrap(), Class::ANY);
        assert_eq!(Class::from_str("999").unwrap(), Class::from_int(999));
        assert!(Class::from_str("65536").is_err());
        assert!(Class::from_str("GOPHER").is_err());
        assert!(Class::from_str("").is_err());
    }

    #[test]
    fn from_bytes() {
        assert_eq!(Class::from_bytes(b"ch"), Some(Class::CH));
        assert_eq!(Class::from_bytes(b"4"), Some(Class::HS));
        assert_eq!(Class::from_bytes(b"whatever"), None);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display() {
        assert_eq!(format!("{}", Class::IN), "IN");
        assert_eq!(format!("{}", Class::CS), "CS");
        assert_eq!(format!("{}", Class::CH), "CH");
        assert_eq!(format!("{}", Class::HS), "HS");
        assert_eq!(format!("{}", Class::ANY), "ANY");

        // 254 is the UPDATE query class NONE which this registry does not
        // carry, 999 is unassigned. Both fall back to decimal.
        assert_eq!(format!("{}", Class::from_int(254)), "254");
        assert_eq!(format!("{}", Class::from_int(999)), "999");
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_round_trip() {
        use std::string::ToString;

        for code in [1u16, 2, 3, 4, 255, 999] {
            let class = Class::from_int(code);
            assert_eq!(
                class.to_string().parse::<Class>().unwrap(),
                class
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Configure, Token};

        assert_tokens(&Class::IN.readable(), &[Token::Str("IN")]);
        assert_tokens(&Class::ANY.readable(), &[Token::Str("ANY")]);
        assert_tokens(&Class::from_int(5).readable(), &[Token::U16(5)]);
        assert_tokens(&Class::IN.compact(), &[Token::U16(1)]);
        assert_tokens(&Class::from_int(5).compact(), &[Token::U16(5)]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Class::IN), "Class::IN");
        assert_eq!(format!("{:?}", Class::from_int(69)), "Class(69)");
    }
}
