//! Help text normalization for completion menus

use zcomp_core::Documented;

/// Fixed description of the conventional `help` option
pub const HELP_OPTION_TEXT: &str = "display usage information";

/// Help text as shown in a completion menu
///
/// Prefers the short help, drops one trailing period, and lowercases the first
/// letter unless the first word looks like an acronym or proper noun.
pub fn get_help<D: Documented + ?Sized>(item: &D) -> Option<String> {
    let help = item.short_help().or_else(|| item.help())?;

    if item.name() == "help" {
        return Some(HELP_OPTION_TEXT.to_string());
    }

    let help = help.strip_suffix('.').unwrap_or(help);
    let first_word = help.split(' ').next().unwrap_or_default();
    if first_word.chars().skip(1).any(char::is_uppercase) {
        return Some(help.to_string());
    }

    let mut chars = help.chars();
    Some(match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    })
}
