/// Keywords every sticker of a set gets when the set is first seen: the set name, the
/// title as a single hyphenated keyword, the individual title words and the emoji.
#[must_use]
pub fn default_set_keywords(set_name: &str, set_title: &str, emoji: Option<&str>) -> String {
    let title_words = set_title.split_whitespace().collect::<Vec<_>>();
    let mut keywords = vec![set_name.to_string()];
    if !title_words.is_empty() {
        keywords.push(title_words.join("-"));
    }
    keywords.extend(title_words.iter().map(ToString::to_string));
    keywords.extend(emoji.map(ToString::to_string));
    keywords.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::normalize_keywords;

    #[test]
    fn set_keywords() {
        assert_eq!(
            default_set_keywords("CoolCats", "Cool Cats Pack", Some("😼")),
            "CoolCats Cool-Cats-Pack Cool Cats Pack 😼"
        );
        assert_eq!(default_set_keywords("name", "  ", None), "name");
    }

    #[test]
    fn set_keywords_are_normalized_like_user_input() {
        let keywords = default_set_keywords("cats", "Cats", Some("🐱"));
        assert_eq!(normalize_keywords(&keywords), vec!["cats", "🐱"]);
    }
}
