mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_zero_is_empty() {
        assert!(Rect::ZERO.is_empty());
        let r = Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 0.0,
        };
        assert!(r.is_empty());
    }

    #[test]
    fn client_id_display() {
        assert_eq!(ClientId(7).to_string(), "tab-7");
    }

    #[test]
    fn client_id_serialization() {
        let json = serde_json::to_string(&ClientId(3)).unwrap();
        assert_eq!(json, "3");
        let back: ClientId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ClientId(3));
    }

    #[test]
    fn edit_command_script_names() {
        assert_eq!(EditCommand::Cut.exec_command(), "cut");
        assert_eq!(EditCommand::SelectAll.exec_command(), "selectAll");
    }
}
