//! Display names derived from email addresses.

/// Derive a display name from the part of `email` before the first `@`.
///
/// Dots become spaces and the first character of every whitespace-separated
/// word is upper-cased. Other characters keep their case.
///
/// ```
/// assert_eq!(wtf_core::name_from_email("test_user@example.com"), "Test_user");
/// assert_eq!(wtf_core::name_from_email("jane.doe@example.com"), "Jane Doe");
/// ```
#[must_use]
pub fn name_from_email(email: &str) -> String {
    let local = email.split_once('@').map_or(email, |(local, _)| local);
    capitalize_words(&local.replace('.', " "))
}

/// Derive display names for each address, preserving order.
///
/// ```
/// let names = wtf_core::names_from_emails(["test_user@example.com", "other_user@example.com"]);
/// assert_eq!(names, vec!["Test_user", "Other_user"]);
/// ```
#[must_use]
pub fn names_from_emails<I, S>(emails: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    emails
        .into_iter()
        .map(|email| name_from_email(email.as_ref()))
        .collect()
}

fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.push(title_case(c));
        } else {
            out.push(c);
        }
    }
    out
}

/// Single-character title case. Characters whose uppercase form is longer
/// than one character (`ß`, `ﬁ`) are left as they are.
fn title_case(c: char) -> char {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        _ => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_email() {
        assert_eq!(name_from_email("test_user@example.com"), "Test_user");
    }

    #[test]
    fn test_dots_become_words() {
        assert_eq!(name_from_email("a.b@example.com"), "A B");
        assert_eq!(name_from_email("chris.cummer@example.com"), "Chris Cummer");
    }

    #[test]
    fn test_missing_at_sign_uses_whole_string() {
        assert_eq!(name_from_email("noatsign"), "Noatsign");
    }

    #[test]
    fn test_only_first_at_sign_counts() {
        assert_eq!(name_from_email("first@second@example.com"), "First");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(name_from_email(""), "");
        assert_eq!(name_from_email("@example.com"), "");
    }

    #[test]
    fn test_inner_case_is_preserved() {
        assert_eq!(name_from_email("jSmith@example.com"), "JSmith");
        assert_eq!(name_from_email("mcDONALD.ron@example.com"), "McDONALD Ron");
    }

    #[test]
    fn test_leading_and_trailing_dots() {
        assert_eq!(name_from_email(".jane.@example.com"), " Jane ");
        assert_eq!(name_from_email("a..b@example.com"), "A  B");
    }

    #[test]
    fn test_no_multi_character_expansion() {
        assert_eq!(name_from_email("\u{df}en@x.com"), "\u{df}en");
        assert_eq!(name_from_email("\u{fb01}ona@x.com"), "\u{fb01}ona");
    }

    #[test]
    fn test_digraphs_use_title_case() {
        assert_eq!(name_from_email("\u{01C6}emal@x.com"), "\u{01C5}emal");
        assert_eq!(name_from_email("\u{01C4}emal@x.com"), "\u{01C5}emal");
        assert_eq!(name_from_email("\u{01C9}ubica@x.com"), "\u{01C8}ubica");
        assert_eq!(name_from_email("\u{01CC}ego\u{0161}@x.com"), "\u{01CB}ego\u{0161}");
        assert_eq!(name_from_email("\u{01F3}ed@x.com"), "\u{01F2}ed");
    }

    #[test]
    fn test_non_ascii_single_letters_upper_case() {
        assert_eq!(name_from_email("\u{e9}lodie.\u{f6}zil@x.com"), "\u{c9}lodie \u{d6}zil");
    }

    #[test]
    fn test_reapplying_is_stable() {
        let once = name_from_email("jane.doe@example.com");
        assert_eq!(name_from_email(&once), once);
    }

    #[test]
    fn test_names_from_emails() {
        let names = names_from_emails(["test_user@example.com", "other_user@example.com"]);
        assert_eq!(names, vec!["Test_user".to_string(), "Other_user".to_string()]);
    }

    #[test]
    fn test_names_from_no_emails() {
        let names = names_from_emails(Vec::<String>::new());
        assert!(names.is_empty());
    }
}
