//! Styled terminal output and interactive prompt primitives.
//!
//! Informational output goes through [`UiContext`] so `--quiet` and
//! color detection apply in one place; warnings and errors go to
//! stderr unconditionally.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use owo_colors::{OwoColorize, Style};

/// Terminal context for output decisions.
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether informational output is suppressed
    pub quiet: bool,
}

impl UiContext {
    /// Detect color support from the environment and CLI flags.
    ///
    /// Color is disabled off-TTY, under `NO_COLOR`, or with `TERM=dumb`.
    pub fn from_env(quiet: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var("NO_COLOR").is_ok();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);

        Self {
            color: is_tty && !no_color && !term_is_dumb,
            quiet,
        }
    }
}

/// Apply a style when color is enabled, pass the text through otherwise.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Style presets shared across the CLI.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn success() -> Style {
        Style::new().green()
    }

    pub fn warning() -> Style {
        Style::new().yellow()
    }

    pub fn error() -> Style {
        Style::new().red().bold()
    }
}

/// Print a success line: `[OK] message`.
pub fn print_success(ctx: &UiContext, message: &str) {
    if ctx.quiet {
        return;
    }
    println!("{} {}", styled("[OK]", styles::success(), ctx.color), message);
}

/// Print an informational line, honoring `--quiet`.
pub fn print_info(ctx: &UiContext, message: &str) {
    if ctx.quiet {
        return;
    }
    println!("{}", message);
}

/// Print a dim `Key: value` line, honoring `--quiet`.
pub fn print_kv(ctx: &UiContext, key: &str, value: &str) {
    if ctx.quiet {
        return;
    }
    println!(
        "{} {}",
        styled(&format!("{}:", key), styles::dim(), ctx.color),
        value
    );
}

/// Print a warning line to stderr. Not suppressed by `--quiet`.
pub fn print_warning(ctx: &UiContext, message: &str) {
    eprintln!(
        "{} {}",
        styled("Warning:", styles::warning(), ctx.color),
        message
    );
}

/// Print an error with an optional hint to stderr.
pub fn print_error(ctx: &UiContext, message: &str, hint: Option<&str>) {
    eprintln!(
        "{} {}",
        styled("Error:", styles::error(), ctx.color),
        message
    );
    if let Some(hint) = hint {
        eprintln!("{}", styled(hint, styles::dim(), ctx.color));
    }
}

/// Prompt for text input, with an optional default shown to the user.
pub fn prompt_input(prompt: &str, default: Option<&str>) -> anyhow::Result<String> {
    require_terminal()?;

    let theme = ColorfulTheme::default();
    let builder = Input::<String>::with_theme(&theme).with_prompt(prompt);

    let result = if let Some(def) = default {
        builder.default(def.to_string()).interact_text()?
    } else {
        builder.allow_empty(true).interact_text()?
    };

    Ok(result)
}

/// Prompt for text input, re-asking until `validate` accepts it.
pub fn prompt_validated(
    prompt: &str,
    default: Option<&str>,
    validate: impl Fn(&str) -> Result<(), String>,
) -> anyhow::Result<String> {
    require_terminal()?;

    let theme = ColorfulTheme::default();
    let mut builder = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .validate_with(|value: &String| validate(value));

    if let Some(def) = default {
        builder = builder.default(def.to_string());
    }

    Ok(builder.interact_text()?)
}

/// Prompt for selection from a list of options.
pub fn prompt_select(prompt: &str, options: &[&str], default: usize) -> anyhow::Result<usize> {
    require_terminal()?;

    let theme = ColorfulTheme::default();
    let result = Select::with_theme(&theme)
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?;

    Ok(result)
}

/// Prompt for confirmation.
pub fn prompt_confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    require_terminal()?;

    let theme = ColorfulTheme::default();
    let result = Confirm::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    Ok(result)
}

fn require_terminal() -> anyhow::Result<()> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Interactive input required. Use flags or run on a TTY."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_without_color_is_plain() {
        assert_eq!(styled("hello", styles::bold(), false), "hello");
    }

    #[test]
    fn test_styled_with_color_adds_escapes() {
        let out = styled("hello", styles::bold(), true);
        assert!(out.contains("hello"));
        assert!(out.starts_with('\x1b'));
    }
}
