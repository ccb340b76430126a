use tabled::{
    settings::{themes::Colorization, Alignment, Color, Padding, Style},
    Table, Tabled,
};

/// Render rows as a table.
/// Styled when writing to a terminal, tab-delimited when piped.
pub fn render_table<T: Tabled>(rows: &[T], terminal_output: bool) -> String {
    let mut table = Table::new(rows);

    if terminal_output {
        table
            .with(Style::sharp())
            .with(Colorization::rows([Color::FG_WHITE, Color::BG_BLACK]))
    } else {
        table
            .with(Style::empty().vertical('\t'))
            .with(Alignment::left())
            .with(Padding::zero())
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Sound<'a> {
        name: &'a str,
        path: &'a str,
    }

    const SOUNDS: &[Sound<'static>] = &[
        Sound {
            name: "Ping",
            path: "/System/Library/Sounds/Ping.aiff",
        },
        Sound {
            name: "Submarine",
            path: "/System/Library/Sounds/Submarine.aiff",
        },
    ];

    #[test]
    fn piped_output_is_tab_delimited() {
        let table = render_table(SOUNDS, false);
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line.matches('\t').count(), 1);
        }
        assert!(table.starts_with("name"));
    }

    #[test]
    fn terminal_output_has_borders() {
        let table = render_table(SOUNDS, true);

        assert!(table.contains("Submarine"));
        assert!(table.contains('┌'));
        assert!(!table.contains('\t'));
    }

    #[test]
    fn no_rows_still_renders_header() {
        let table = render_table::<Sound>(&[], false);
        assert!(table.starts_with("name"));
        assert!(table.contains("path"));
    }
}
