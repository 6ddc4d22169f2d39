//! Construction of IGDB query expressions.

/// IGDB platform identifier for the Nintendo Switch.
pub const SWITCH_PLATFORM_ID: u32 = 130;

/// IGDB category code for "main game" entries (no DLC, bundles, mods).
pub const MAIN_GAME_CATEGORY: u32 = 0;

/// Maximum number of records requested per search.
pub const RESULT_LIMIT: u32 = 10;

const FIELDS: &str = "id,name,category,platforms,slug";

/// Build the query expression for a Switch main-game search.
///
/// The term is embedded verbatim: IGDB documents no escaping rule for its
/// grammar, so a term containing `"` can break the expression. Known
/// limitation, callers sanitize if they care.
pub fn build_query(term: &str) -> String {
    format!(
        "fields {}; where platforms = ({}) & category = {}; search \"{}\"; limit {};",
        FIELDS, SWITCH_PLATFORM_ID, MAIN_GAME_CATEGORY, term, RESULT_LIMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_grammar() {
        let query = build_query("mario kart");
        assert_eq!(
            query,
            "fields id,name,category,platforms,slug; \
             where platforms = (130) & category = 0; \
             search \"mario kart\"; limit 10;"
        );
    }

    #[test]
    fn test_term_embedded_verbatim() {
        let query = build_query("splatoon & friends; 100%");
        assert!(query.contains("search \"splatoon & friends; 100%\";"));
        assert!(query.contains("limit 10;"));
    }

    #[test]
    fn test_quote_in_term_is_not_escaped() {
        // Documented limitation: the quote passes through untouched.
        let query = build_query(r#"say "hello""#);
        assert!(query.contains(r#"search "say "hello"";"#));
    }
}
