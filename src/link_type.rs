use serde_repr::{Deserialize_repr, Serialize_repr};

/// Numeric `type` code carried by `plan.php` links.
#[derive(Serialize_repr, Deserialize_repr, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum LinkType {
    Teacher = 10,
    Room = 20,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_the_timetable_page() {
        assert_eq!(serde_json::to_string(&LinkType::Teacher).unwrap(), "10");
        assert_eq!(serde_json::to_string(&LinkType::Room).unwrap(), "20");
        assert!(serde_json::from_str::<LinkType>("30").is_err());
    }
}
