use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Base letters of `s`: decomposed, accents dropped, lower-cased.
fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Human-friendly string ordering for display sorting.
///
/// Letters compare by their base form first, ignoring case and accents, so
/// `"apple"` sorts before `"Banana"` and `"Éclair"` before `"Zebra"`. Strings
/// that are still equal put the lower-case form first at the first differing
/// position. Anything still tied falls back to plain code point order, which
/// keeps the ordering total and puts unaccented letters before accented ones.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    match folded(a).cmp(folded(b)) {
        Ordering::Equal => {}
        primary => return primary,
    }

    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }

    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("apple", "Banana", Ordering::Less)]
    #[case("Banana", "apple", Ordering::Greater)]
    #[case("a", "A", Ordering::Less)]
    #[case("YOLO", "yolo", Ordering::Greater)]
    #[case("Shark", "Shark", Ordering::Equal)]
    #[case("Community", "community", Ordering::Greater)]
    #[case("event", "Sponsorship", Ordering::Less)]
    #[case("Pair", "Pair Extraordinaire", Ordering::Less)]
    #[case("Éclair", "Zebra", Ordering::Less)]
    #[case("Ångström", "Badge", Ordering::Less)]
    #[case("élan", "eagle", Ordering::Greater)]
    #[case("elan", "élan", Ordering::Less)]
    #[case("Zoë", "Zoe", Ordering::Greater)]
    fn compares_like_a_dictionary(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(locale_cmp(a, b), expected);
    }

    #[test]
    fn ordering_is_antisymmetric() {
        let words = [
            "a", "A", "b", "B", "ab", "Ab", "aB", "", "Zed", "zed", "é", "É",
            "e",
        ];
        for x in words {
            for y in words {
                assert_eq!(locale_cmp(x, y), locale_cmp(y, x).reverse());
            }
        }
    }
}
