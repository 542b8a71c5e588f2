use super::Config;
use std::fmt;

/// A problem in the configuration that `helium --check` reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Finding {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Config {
    /// Runs every check and prints what it finds. Returns the findings.
    pub fn check(&self, verbose: bool) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (name, check) in [
            ("colors", Self::check_colors as fn(&Self) -> Vec<Finding>),
            ("bar height", Self::check_bar_height),
            ("tags", Self::check_tags),
            ("buttons", Self::check_buttons),
        ] {
            if verbose {
                println!("Checking {name}.");
            }
            let found = check(self);
            if verbose && found.is_empty() {
                println!("The {name} are okay.");
            }
            findings.extend(found);
        }
        for finding in &findings {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {finding} \x1b[0m");
        }
        findings
    }

    #[must_use]
    pub fn check_colors(&self) -> Vec<Finding> {
        [
            ("bar.focused", &self.bar.focused),
            ("bar.unfocused", &self.bar.unfocused),
            ("bar.title", &self.bar.title),
        ]
        .into_iter()
        .filter(|(_, color)| !is_hex_color(color))
        .map(|(field, color)| Finding::new(field, format!("`{color}` is not a #RRGGBB color")))
        .collect()
    }

    #[must_use]
    pub fn check_bar_height(&self) -> Vec<Finding> {
        if self.bar.height < 0 {
            return vec![Finding::new(
                "bar.height",
                format!("{} is negative, use 0 to disable bars", self.bar.height),
            )];
        }
        vec![]
    }

    #[must_use]
    pub fn check_tags(&self) -> Vec<Finding> {
        if self.tags.is_empty() {
            return vec![Finding::new("tags", "at least one tag is needed")];
        }
        vec![]
    }

    #[must_use]
    pub fn check_buttons(&self) -> Vec<Finding> {
        let buttons = [
            ("move_button", self.move_button),
            ("resize_button", self.resize_button),
            ("close_button", self.close_button),
        ];
        let mut findings = Vec::new();
        for (i, (field, button)) in buttons.iter().enumerate() {
            if let Some((other, _)) = buttons[..i].iter().find(|(_, b)| b == button) {
                findings.push(Finding::new(
                    *field,
                    format!("{button:?} is already bound by {other}"),
                ));
            }
        }
        findings
    }
}

fn is_hex_color(color: &str) -> bool {
    color
        .strip_prefix('#')
        .map_or(false, |hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
