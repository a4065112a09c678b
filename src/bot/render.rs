//! Reply rendering for the suggestion list.

/// IRC bold toggle, the reply channel's highlight convention.
const HIGHLIGHT: char = '\x02';

/// Render the final reply for a (possibly empty) list of available names.
///
/// Deterministic: the same input always yields byte-identical output.
pub fn render_suggestions(available: &[String]) -> String {
    if available.is_empty() {
        return "No unused names found, please try again.".to_string();
    }
    format!(
        "You could call your next character {}.",
        join_with_or(available)
    )
}

/// Join names with commas, the final two with "or", each wrapped in bold.
fn join_with_or(names: &[String]) -> String {
    let bold: Vec<String> = names
        .iter()
        .map(|n| format!("{}{}{}", HIGHLIGHT, n, HIGHLIGHT))
        .collect();
    match bold.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{} or {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            render_suggestions(&[]),
            "No unused names found, please try again."
        );
    }

    #[test]
    fn test_single_name() {
        assert_eq!(
            render_suggestions(&names(&["Vorix"])),
            "You could call your next character \x02Vorix\x02."
        );
    }

    #[test]
    fn test_two_names_joined_with_or() {
        assert_eq!(
            render_suggestions(&names(&["Vorix", "Talen"])),
            "You could call your next character \x02Vorix\x02 or \x02Talen\x02."
        );
    }

    #[test]
    fn test_three_names_comma_then_or() {
        assert_eq!(
            render_suggestions(&names(&["Vorix", "Talen", "Mira"])),
            "You could call your next character \x02Vorix\x02, \x02Talen\x02 or \x02Mira\x02."
        );
    }

    #[test]
    fn test_idempotent() {
        let input = names(&["Vorix", "Talen"]);
        assert_eq!(render_suggestions(&input), render_suggestions(&input));
    }
}
