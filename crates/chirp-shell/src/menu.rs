//! Menu registry and input parsing for the interactive shell.

/// An action picked from the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Print every post, marking the selection
    Display,
    /// Choose a post by id
    Select,
    /// Write a new post
    Add,
    /// Rewrite the selected post
    Edit,
    /// Like the selected post
    Like,
    /// Remove the selected post
    Delete,
    /// Leave the shell
    Exit,
}

/// Menu metadata for display.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Number the user types to pick this entry.
    pub number: u8,
    /// Text shown after the number.
    pub label: &'static str,
    pub choice: MenuChoice,
}

/// Static registry of the menu, in display order.
pub static MENU: &[MenuItem] = &[
    MenuItem {
        number: 1,
        label: "Display Timeline",
        choice: MenuChoice::Display,
    },
    MenuItem {
        number: 2,
        label: "Select Tweet",
        choice: MenuChoice::Select,
    },
    MenuItem {
        number: 3,
        label: "Add New Tweet",
        choice: MenuChoice::Add,
    },
    MenuItem {
        number: 4,
        label: "Edit Selected Tweet",
        choice: MenuChoice::Edit,
    },
    MenuItem {
        number: 5,
        label: "Like Selected Tweet",
        choice: MenuChoice::Like,
    },
    MenuItem {
        number: 6,
        label: "Delete Tweet",
        choice: MenuChoice::Delete,
    },
    MenuItem {
        number: 7,
        label: "Exit",
        choice: MenuChoice::Exit,
    },
];

/// Result of reading one line at the `Select:` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceInput {
    /// A number matching a menu entry.
    Choice(MenuChoice),
    /// A number with no menu entry.
    OutOfRange(i64),
    /// Anything that is not an integer.
    NotANumber,
}

/// Parse a menu choice from a line of user input.
///
/// # Examples
///
/// ```
/// use chirp_shell::menu::{parse_choice, ChoiceInput, MenuChoice};
///
/// assert_eq!(parse_choice("3"), ChoiceInput::Choice(MenuChoice::Add));
/// assert_eq!(parse_choice(" 9 "), ChoiceInput::OutOfRange(9));
/// assert_eq!(parse_choice("add"), ChoiceInput::NotANumber);
/// ```
pub fn parse_choice(input: &str) -> ChoiceInput {
    let Some(number) = parse_number(input) else {
        return ChoiceInput::NotANumber;
    };

    MENU.iter()
        .find(|item| i64::from(item.number) == number)
        .map_or(ChoiceInput::OutOfRange(number), |item| {
            ChoiceInput::Choice(item.choice)
        })
}

/// Parse a signed integer, ignoring surrounding whitespace.
pub fn parse_number(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers_are_sequential() {
        let numbers: Vec<u8> = MENU.iter().map(|item| item.number).collect();
        assert_eq!(numbers, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_parse_every_choice() {
        assert_eq!(parse_choice("1"), ChoiceInput::Choice(MenuChoice::Display));
        assert_eq!(parse_choice("2"), ChoiceInput::Choice(MenuChoice::Select));
        assert_eq!(parse_choice("3"), ChoiceInput::Choice(MenuChoice::Add));
        assert_eq!(parse_choice("4"), ChoiceInput::Choice(MenuChoice::Edit));
        assert_eq!(parse_choice("5"), ChoiceInput::Choice(MenuChoice::Like));
        assert_eq!(parse_choice("6"), ChoiceInput::Choice(MenuChoice::Delete));
        assert_eq!(parse_choice("7"), ChoiceInput::Choice(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_choice_trims_whitespace() {
        assert_eq!(
            parse_choice("  5\r\n"),
            ChoiceInput::Choice(MenuChoice::Like)
        );
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(parse_choice("0"), ChoiceInput::OutOfRange(0));
        assert_eq!(parse_choice("8"), ChoiceInput::OutOfRange(8));
        assert_eq!(parse_choice("-1"), ChoiceInput::OutOfRange(-1));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(parse_choice(""), ChoiceInput::NotANumber);
        assert_eq!(parse_choice("abc"), ChoiceInput::NotANumber);
        assert_eq!(parse_choice("1.5"), ChoiceInput::NotANumber);
        assert_eq!(parse_choice("99999999999999999999"), ChoiceInput::NotANumber);
    }
}
