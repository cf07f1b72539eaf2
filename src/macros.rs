//! Internal macro for declaring conversion tables.
//!
//! Every built-in numeral system in [`crate::tables`] is a static key/glyph table. The `table!`
//! macro keeps those declarations close to how the data reads in Unicode charts: one `key => glyph`
//! pair per line. Prefixing the body with `additive;` marks the system as additive rather than
//! positional, which suppresses decimal-separator output during formatting (see
//! [`crate::notation`] for the key syntax itself).

macro_rules! table {
    (additive; $($key:literal => $glyph:literal),* $(,)?) => {
        $crate::system::ConversionTable {
            additive: true,
            entries: &[$(($key, $glyph)),*],
        }
    };
    ($($key:literal => $glyph:literal),* $(,)?) => {
        $crate::system::ConversionTable {
            additive: false,
            entries: &[$(($key, $glyph)),*],
        }
    };
}

pub(crate) use table;

#[cfg(test)]
mod tests {
    #[test]
    fn table_macro_positional() {
        static T: crate::system::ConversionTable = table!("0" => "a", "1" => "b");
        assert!(!T.is_additive());
        assert_eq!(T.get("0"), Some("a"));
        assert_eq!(T.get("2"), None);
    }

    #[test]
    fn table_macro_additive() {
        static T: crate::system::ConversionTable = table!(additive; "o1" => "x");
        assert!(T.is_additive());
        assert_eq!(T.get("o1"), Some("x"));
    }

    #[test]
    fn table_macro_empty() {
        static T: crate::system::ConversionTable = table!();
        assert!(!T.is_additive());
        assert_eq!(T.len(), 0);
    }
}
