//! File names of exported cards.

use crate::style::StyleName;

use regex::Regex;
use std::sync::OnceLock;

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Whitespace runs and path separators become `_`, so a workout name
/// always yields a single path component.
fn underscored(s: &str) -> String {
    whitespace()
        .replace_all(s, "_")
        .replace(['/', '\\'], "_")
}

/// `"{name}_{style}_{date}.png"`, each whitespace run replaced by `_`.
pub fn download_file_name(name: &str, style: StyleName, date: &str) -> String {
    underscored(&format!("{name}_{style}_{date}.png"))
}

pub fn share_file_name(name: &str, style: StyleName) -> String {
    underscored(&format!("{name}_{style}.png"))
}

pub fn preview_file_name(name: &str, style: StyleName) -> String {
    underscored(&format!("{name}_{style}_preview.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_name_replaces_whitespace() {
        assert_eq!(
            download_file_name("Leg Day", StyleName::Bold, "Jan 5, 2024"),
            "Leg_Day_bold_Jan_5,_2024.png"
        );
        assert_eq!(
            download_file_name("Upper \t  Body", StyleName::Story, "Dec 31, 2023"),
            "Upper_Body_story_Dec_31,_2023.png"
        );
    }

    #[test]
    fn separators_never_reach_the_path() {
        assert_eq!(
            download_file_name("Push/Pull", StyleName::Bold, "Jan 5, 2024"),
            "Push_Pull_bold_Jan_5,_2024.png"
        );
        assert_eq!(
            share_file_name("./../x", StyleName::Fire),
            "._.._x_fire.png"
        );
        assert_eq!(
            preview_file_name("a\\b", StyleName::Minimal),
            "a_b_minimal_preview.png"
        );
    }

    #[test]
    fn share_and_preview_names() {
        assert_eq!(share_file_name("Leg Day", StyleName::Fire), "Leg_Day_fire.png");
        assert_eq!(
            preview_file_name("Push", StyleName::Minimal),
            "Push_minimal_preview.png"
        );
    }
}
