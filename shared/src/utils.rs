use crate::types::FieldErrors;

pub fn validate_note(title: &str, body: &str) -> FieldErrors {
    FieldErrors {
        title: title.trim().is_empty(),
        body: body.trim().is_empty(),
    }
}

/// Rolling hash of the title's UTF-16 code units, folded into a color hue.
/// Same title always lands on the same hue.
pub fn title_hue(title: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in title.encode_utf16() {
        hash = (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash.rem_euclid(360)
}

pub fn note_background(title: &str) -> String {
    format!("hsl({}, 70%, 80%)", title_hue(title))
}

#[cfg(test)]
mod tests {
    use super::{note_background, title_hue, validate_note};

    #[test]
    fn accepts_filled_fields() {
        let errors = validate_note("Groceries", "milk, eggs");
        assert!(errors.is_valid());
        assert!(!errors.title);
        assert!(!errors.body);
    }

    #[test]
    fn flags_blank_title_only() {
        let errors = validate_note("   ", "still a body");
        assert!(!errors.is_valid());
        assert!(errors.title);
        assert!(!errors.body);
    }

    #[test]
    fn flags_blank_body_only() {
        let errors = validate_note("still a title", "\n\t ");
        assert!(!errors.is_valid());
        assert!(!errors.title);
        assert!(errors.body);
    }

    #[test]
    fn flags_both_empty_fields() {
        let errors = validate_note("", "");
        assert!(errors.title);
        assert!(errors.body);
    }

    #[test]
    fn hue_is_deterministic() {
        assert_eq!(title_hue("Groceries"), title_hue("Groceries"));
        assert_eq!(title_hue("заметка"), title_hue("заметка"));
    }

    #[test]
    fn hue_stays_in_range() {
        for title in ["", "A", "Groceries", "a much longer note title", "числа и 記号 ❌"] {
            let hue = title_hue(title);
            assert!((0..360).contains(&hue), "{title:?} -> {hue}");
        }
    }

    #[test]
    fn hue_of_single_code_unit_is_the_code_point() {
        assert_eq!(title_hue("A"), 65);
        assert_eq!(title_hue(""), 0);
    }

    #[test]
    fn background_renders_hsl_shape() {
        assert_eq!(note_background(""), "hsl(0, 70%, 80%)");
        assert_eq!(note_background("A"), "hsl(65, 70%, 80%)");
    }
}
