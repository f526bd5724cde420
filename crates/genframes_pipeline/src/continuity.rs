//! Continuity hints carried from earlier shots into the next frame prompt.

use genframes_core::Shot;

/// How many preceding shots are inspected.
pub const CONTINUITY_WINDOW: usize = 2;

/// How many phrases survive into the final context.
pub const MAX_CONTINUITY_PHRASES: usize = 2;

/// A keyword group and the phrase it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinuityRule {
    /// Lower-case substrings, any of which triggers the rule
    pub keywords: &'static [&'static str],
    /// Phrase appended to the context
    pub phrase: &'static str,
}

/// Rules checked against every inspected shot, in this order.
pub const CONTINUITY_RULES: &[ContinuityRule] = &[
    ContinuityRule {
        keywords: &["crying", "tears", "sad", "despondent"],
        phrase: "panda is crying with tears on cheeks",
    },
    ContinuityRule {
        keywords: &["concerned", "worried", "cautiously"],
        phrase: "cat shows concern and worry",
    },
    ContinuityRule {
        keywords: &["sitting", "sits"],
        phrase: "characters are sitting close together",
    },
    ContinuityRule {
        keywords: &["approaches", "walks towards"],
        phrase: "cat is near the panda",
    },
];

impl ContinuityRule {
    fn matches(&self, action: &str) -> bool {
        self.keywords.iter().any(|keyword| action.contains(keyword))
    }
}

/// Continuity context for the shot at `index` in `shots`.
///
/// Looks at up to two preceding shots and keeps the last two phrases they
/// produce, joined with `", "`. Returns `None` for the first shot and when
/// nothing matches.
///
/// # Examples
///
/// ```
/// use genframes_core::Shot;
/// use genframes_pipeline::continuity_context;
///
/// let shots = vec![
///     Shot::new("Grief", "She is crying in the rain", "Close-up", "3 seconds", 1),
///     Shot::new("Rest", "She sits quietly on a bench", "Wide shot", "4 seconds", 2),
///     Shot::new("Next", "A bus arrives", "Medium shot", "2 seconds", 3),
/// ];
/// assert_eq!(
///     continuity_context(&shots, 2).as_deref(),
///     Some("panda is crying with tears on cheeks, characters are sitting close together"),
/// );
/// assert_eq!(continuity_context(&shots, 0), None);
/// ```
pub fn continuity_context(shots: &[Shot], index: usize) -> Option<String> {
    let end = index.min(shots.len());
    let start = end.saturating_sub(CONTINUITY_WINDOW);

    let phrases: Vec<&str> = shots[start..end]
        .iter()
        .flat_map(|shot| {
            let action = shot.action.to_lowercase();
            CONTINUITY_RULES
                .iter()
                .filter(move |rule| rule.matches(&action))
                .map(|rule| rule.phrase)
        })
        .collect();

    if phrases.is_empty() {
        return None;
    }

    let keep = phrases.len().saturating_sub(MAX_CONTINUITY_PHRASES);
    Some(phrases[keep..].join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot(action: &str, order: u32) -> Shot {
        Shot::new("Shot", action, "Wide shot", "2 seconds", order)
    }

    #[test]
    fn test_first_shot_has_no_context() {
        let shots = vec![shot("crying", 1)];
        assert_eq!(continuity_context(&shots, 0), None);
    }

    #[test]
    fn test_no_matches_is_none() {
        let shots = vec![shot("A car speeds by", 1), shot("It crashes", 2)];
        assert_eq!(continuity_context(&shots, 1), None);
    }

    #[test]
    fn test_only_two_predecessors_are_inspected() {
        let shots = vec![
            shot("He is crying", 1),
            shot("A car passes", 2),
            shot("Rain falls", 3),
            shot("Next", 4),
        ];
        assert_eq!(continuity_context(&shots, 3), None);
    }

    #[test]
    fn test_groups_are_checked_independently() {
        let shots = vec![shot("The cat, worried, sits down", 1), shot("Next", 2)];
        assert_eq!(
            continuity_context(&shots, 1).as_deref(),
            Some("cat shows concern and worry, characters are sitting close together")
        );
    }

    #[test]
    fn test_keeps_last_two_phrases() {
        let shots = vec![
            shot("Sad panda, cautiously watched", 1),
            shot("The cat approaches and sits", 2),
            shot("Next", 3),
        ];
        let context = continuity_context(&shots, 2).unwrap();
        assert_eq!(
            context,
            "characters are sitting close together, cat is near the panda"
        );
        assert_eq!(context.matches(", ").count(), 1);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let shots = vec![shot("TEARS stream down", 1), shot("Next", 2)];
        assert_eq!(
            continuity_context(&shots, 1).as_deref(),
            Some("panda is crying with tears on cheeks")
        );
    }

    #[test]
    fn test_index_past_end_uses_last_shots() {
        let shots = vec![shot("She sits", 1)];
        assert_eq!(
            continuity_context(&shots, 5).as_deref(),
            Some("characters are sitting close together")
        );
    }
}
