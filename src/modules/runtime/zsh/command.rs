//! `_arguments` rendering for one command and its subcommands

use std::collections::BTreeSet;
use std::iter;
use tracing::debug;
use zcomp_core::{Arity, CommandNode, OptionSpec, ParamKind, Parameter};
use zcomp_types::QuoteDialect;

use super::help::get_help;
use super::quote::{escape, escape_char, quote};
use super::spec::complete_type;

const DISPATCH_SPEC: &str = "'*::: := ->subcmd' && return 0";

/// Render the `_arguments` call for `command`, followed by the dispatch into
/// its subcommands when it is a group
pub fn complete_command(command: &CommandNode, allow_interspersed_args: bool) -> Vec<String> {
    let mut specs: Vec<String> = Vec::new();
    // positional words before the subcommand name
    let mut slots: usize = 0;
    let mut has_variadic = false;

    for param in &command.params {
        match &param.kind {
            ParamKind::Option(spec) => specs.push(option_spec(param, spec)),
            ParamKind::Argument(spec) => {
                if has_variadic {
                    debug!(
                        "Skipping argument '{}' of '{}' after a variadic argument",
                        param.name, command.name
                    );
                    continue;
                }

                let value_spec = value_spec(param);
                match spec.nargs {
                    Arity::Variadic => {
                        has_variadic = true;
                        slots += 1;
                        specs.push(format!("'*{}'", value_spec));
                    }
                    Arity::Fixed(nargs) => {
                        let nargs = nargs as usize;
                        slots += nargs;
                        specs.extend(iter::repeat(format!("'{}'", value_spec)).take(nargs));
                    }
                }
            }
        }
    }

    if command.is_group() {
        specs.push(subcommand_spec(command));
        specs.push(DISPATCH_SPEC.to_string());
    }

    let mut lines = Vec::with_capacity(specs.len() + 1);
    lines.push(opening_line(command, allow_interspersed_args, !specs.is_empty()));

    let last = specs.len().saturating_sub(1);
    for (i, spec) in specs.iter().enumerate() {
        if i < last {
            lines.push(format!("  {} \\", spec));
        } else {
            lines.push(format!("  {}", spec));
        }
    }

    if command.is_group() {
        lines.push(String::new());
        lines.push(format!("service=$line[{}]", slots + 1));
        lines.push("curcontext=${curcontext%:*}-$service:".to_string());
        lines.push("case $service in".to_string());

        for (name, subcommand) in command.subcommands() {
            lines.push(format!("  {})", quote(name, QuoteDialect::Single)));
            lines.extend(
                complete_command(subcommand, allow_interspersed_args)
                    .into_iter()
                    .map(|line| indent(line, 4)),
            );
            lines.push("  ;;".to_string());
        }

        lines.push("esac".to_string());
    }

    lines
}

fn opening_line(command: &CommandNode, allow_interspersed_args: bool, continued: bool) -> String {
    let mut line = String::from("_arguments -s -S");
    if !allow_interspersed_args {
        line.push_str(" -A ");
        line.push_str(&quote(&option_pattern(command), QuoteDialect::Single));
    }
    if command.is_group() {
        line.push_str(" -C");
    }
    line.push_str(" :");
    if continued {
        line.push_str(" \\");
    }
    line
}

/// Glob matching any option word of this command, for `_arguments -A`
fn option_pattern(command: &CommandNode) -> String {
    let mut prefixes: BTreeSet<char> = command
        .params
        .iter()
        .filter_map(Parameter::as_option)
        .flat_map(OptionSpec::all_names)
        .filter_map(|name| name.chars().next())
        .collect();
    let has_dash = prefixes.remove(&'-');

    if prefixes.is_empty() {
        return "-*".to_string();
    }

    let mut class = String::new();
    for prefix in prefixes {
        if matches!(prefix, ']' | '^' | '!' | '\\') {
            class.push('\\');
        }
        class.push(prefix);
    }
    // a trailing dash is literal inside a bracket expression
    if has_dash {
        class.push('-');
    }

    if class.chars().count() == 1 {
        format!("{}*", class)
    } else {
        format!("[{}]*", class)
    }
}

/// One `_arguments` clause for an option, aliases grouped
fn option_spec(param: &Parameter, spec: &OptionSpec) -> String {
    let names: Vec<&str> = spec.all_names().collect();
    let mut clause = String::from("'");

    if spec.repeatable() {
        clause.push('*');
    } else if names.len() > 1 {
        let exclusions: Vec<String> = names
            .iter()
            .map(|name| escape(name, QuoteDialect::Single))
            .collect();
        clause.push_str(&format!("({})", exclusions.join(" ")));
    }

    if let [name] = names.as_slice() {
        clause.push_str(&escape(name, QuoteDialect::Single));
    } else {
        let aliases: Vec<String> = names
            .iter()
            .map(|name| quote(name, QuoteDialect::Single))
            .collect();
        clause.push_str(&format!("'{{{}}}'", aliases.join(",")));
    }

    if let Some(help) = get_help(param).filter(|help| !help.is_empty()) {
        let help = escape_char(&escape_char(&help, '['), ']');
        clause.push_str(&format!("[{}]", escape(&help, QuoteDialect::Single)));
    }

    if spec.takes_value() {
        let value_spec = value_spec(param);
        // tuple elements are already expanded by complete_type
        let count = if param.value_type.is_tuple() {
            1
        } else {
            spec.nargs as usize
        };
        clause.push_str(&vec![value_spec; count].join(" "));
    }

    clause.push('\'');
    clause
}

/// Value spec of a parameter, escaped for a single-quoted clause
fn value_spec(param: &Parameter) -> String {
    escape(
        &complete_type(&param.value_type, &param.name, param.default.as_ref()),
        QuoteDialect::Single,
    )
}

/// `:subcommand:((name\:help ...))` listing subcommands in declaration order
fn subcommand_spec(command: &CommandNode) -> String {
    let subcommands: Vec<String> = command
        .subcommands()
        .map(|(name, subcommand)| {
            let name = quote(&escape_char(name, ':'), QuoteDialect::Double);
            match get_help(subcommand).filter(|help| !help.is_empty()) {
                Some(help) => format!(
                    "{}\\:{}",
                    name,
                    quote(&escape_char(&help, ':'), QuoteDialect::Double)
                ),
                None => name,
            }
        })
        .collect();

    format!(
        "':subcommand:(({}))'",
        escape(&subcommands.join(" "), QuoteDialect::Single)
    )
}

fn indent(line: String, width: usize) -> String {
    if line.is_empty() {
        line
    } else {
        format!("{:width$}{}", "", line, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use zcomp_core::{Bounds, TypeDescriptor};

    /// Render a leaf command holding `param` plus the help flag and return the
    /// clause rendered for `param`.
    fn clause(param: Parameter) -> String {
        let command = CommandNode::new("cli")
            .with_param(param)
            .with_param(Parameter::help_option());
        let lines = complete_command(&command, true);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "_arguments -s -S : \\");
        assert_eq!(lines[2], "  '--help[display usage information]'");
        lines[1]
            .strip_prefix("  ")
            .and_then(|l| l.strip_suffix(" \\"))
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_option_clauses() {
        let cases = [
            (Parameter::option("n", ["--n"]).with_default(1), "'--n:n [1]:'"),
            (Parameter::option("n", ["--n"]), "'--n:n:'"),
            (
                Parameter::option("from_", ["--from", "-f"]),
                r"'(--from -f)'{--from,-f}':from:'",
            ),
            (
                Parameter::option("pos", ["--pos"]).with_nargs(2),
                "'--pos:pos: :pos:'",
            ),
            (
                Parameter::option("item", ["--item"]).with_type(TypeDescriptor::tuple(vec![
                    TypeDescriptor::string(),
                    TypeDescriptor::new("integer", zcomp_core::TypeKind::Other("Int".into())),
                ])),
                "'--item:item: :item:'",
            ),
            (
                Parameter::option("message", ["--message", "-m"]).multiple(),
                r"'*'{--message,-m}':message:'",
            ),
            (
                Parameter::option("verbose", ["-v", "--verbose"]).counter(),
                r"'*'{-v,--verbose}''",
            ),
            (
                Parameter::option("shout", ["--shout"])
                    .with_secondary_opts(["--no-shout"])
                    .flag()
                    .with_default(false),
                r"'(--shout --no-shout)'{--shout,--no-shout}''",
            ),
            (Parameter::option("shout", ["--shout"]).flag(), "'--shout'"),
            (
                Parameter::option("shout", ["--shout"])
                    .with_secondary_opts(["--no-shout", "-S"])
                    .flag(),
                r"'(--shout --no-shout -S)'{--shout,--no-shout,-S}''",
            ),
            (
                Parameter::option("hash_type", ["--hash-type"])
                    .with_type(TypeDescriptor::choice(["MD5", "SHA1"])),
                "'--hash-type:hash_type:(MD5 SHA1)'",
            ),
            (
                Parameter::option("yes", ["--yes"])
                    .flag()
                    .with_help("Confirm the action without prompting."),
                "'--yes[confirm the action without prompting]'",
            ),
            (
                Parameter::option("count", ["--count"]).with_type(TypeDescriptor::int_range(
                    Bounds::new(Some(0.into()), Some(20.into())),
                )),
                "'--count: :_numbers -l 0 -m 20 count'",
            ),
            (
                Parameter::option("name", ["--name"]).with_default("Default"),
                "'--name:name [Default]:'",
            ),
        ];

        for (param, expected) in cases {
            assert_eq!(clause(param), expected);
        }
    }

    #[test]
    fn test_tuple_option_ignores_nargs() {
        let pair = TypeDescriptor::tuple(vec![TypeDescriptor::string(), TypeDescriptor::string()]);
        let spec = clause(
            Parameter::option("item", ["--item"])
                .with_nargs(2)
                .with_type(pair),
        );
        assert_eq!(spec, "'--item:item: :item:'");
    }

    #[test]
    fn test_count_wins_over_exclusion_group() {
        let spec = clause(
            Parameter::option("verbose", ["-v", "--verbose"])
                .counter()
                .with_help("Increase verbosity."),
        );
        assert_eq!(spec, r"'*'{-v,--verbose}'[increase verbosity]'");
    }

    #[test]
    fn test_argument_clauses() {
        let cases = [
            (Parameter::argument("filename"), "':filename:'"),
            (Parameter::argument("src").variadic(), "'*:src:'"),
            (
                Parameter::argument("input").with_type(TypeDescriptor::file()),
                "':input:_files'",
            ),
            (
                Parameter::argument("light").with_type(TypeDescriptor::boolean()),
                "':light:(0 1 false true f t no yes n y off on)'",
            ),
            (
                Parameter::argument("dir").with_type(TypeDescriptor::path(false, true)),
                "':dir:_files -/'",
            ),
        ];

        for (param, expected) in cases {
            assert_eq!(clause(param), expected);
        }
    }

    #[test]
    fn test_fixed_arity_repeats_positional() {
        let command = CommandNode::new("cli").with_param(Parameter::argument("point").with_nargs(2));
        assert_eq!(
            complete_command(&command, true),
            ["_arguments -s -S : \\", "  ':point:' \\", "  ':point:'"]
        );
    }

    #[test]
    fn test_variadic_suppresses_later_arguments() {
        let command = CommandNode::new("cli")
            .with_param(Parameter::argument("src").variadic().with_type(TypeDescriptor::file()))
            .with_param(Parameter::argument("dest").with_type(TypeDescriptor::file()))
            .with_param(Parameter::help_option());
        assert_eq!(
            complete_command(&command, true),
            [
                "_arguments -s -S : \\",
                "  '*:src:_files' \\",
                "  '--help[display usage information]'",
            ]
        );
    }

    #[test]
    fn test_option_needs_quoting() {
        let spec = clause(Parameter::option("terrible", ["--terrible", "-$"]));
        assert_eq!(spec, r"'(--terrible -$)'{--terrible,'-$'}':terrible:'");
    }

    #[test]
    fn test_brackets_in_help_are_escaped() {
        let spec = clause(
            Parameter::option("test", ["--test"]).with_help("test suite [default: default]"),
        );
        assert_eq!(spec, r"'--test[test suite \[default: default\]]:test:'");
    }

    #[test]
    fn test_empty_help_is_omitted() {
        let spec = clause(Parameter::option("quiet", ["--quiet"]).flag().with_help(""));
        assert_eq!(spec, "'--quiet'");
    }

    #[test]
    fn test_apostrophes_are_escaped() {
        let spec = clause(Parameter::option("bar", ["-b", "--bar"]).with_help("bar's help"));
        assert_eq!(spec, r"'(-b --bar)'{-b,--bar}'[bar'\''s help]:bar:'");

        let spec = clause(Parameter::option("who", ["--who"]).with_default(json!("o'brien")));
        assert_eq!(spec, r"'--who:who [o'\''brien]:'");
    }

    #[test]
    fn test_non_dash_prefix_pattern() {
        let command = CommandNode::new("cli")
            .with_param(Parameter::option("w", ["+w"]).with_secondary_opts(["-w"]).flag())
            .with_param(Parameter::help_option());
        assert_eq!(
            complete_command(&command, false),
            [
                "_arguments -s -S -A '[+-]*' : \\",
                r"  '(+w -w)'{+w,-w}'' \",
                "  '--help[display usage information]'",
            ]
        );
    }

    #[test]
    fn test_option_pattern() {
        assert_eq!(option_pattern(&CommandNode::new("cli")), "-*");

        let plus_only = CommandNode::new("cli").with_param(Parameter::option("w", ["+w"]));
        assert_eq!(option_pattern(&plus_only), "+*");

        let slash = CommandNode::new("cli")
            .with_param(Parameter::option("q", ["/q"]))
            .with_param(Parameter::option("w", ["+w"]))
            .with_param(Parameter::help_option());
        assert_eq!(option_pattern(&slash), "[+/-]*");
    }

    #[test]
    fn test_command_without_clauses() {
        assert_eq!(complete_command(&CommandNode::new("bare"), true), ["_arguments -s -S :"]);
    }

    #[test]
    fn test_group_dispatch() {
        let command = CommandNode::group("cli")
            .with_param(Parameter::argument("arg"))
            .with_param(Parameter::help_option())
            .with_command(
                CommandNode::new("foo")
                    .with_help("Foo.")
                    .with_param(Parameter::argument("foo")),
            )
            .with_command(CommandNode::new("bar").with_param(Parameter::argument("bar")));

        assert_eq!(
            complete_command(&command, false),
            [
                "_arguments -s -S -A '-*' -C : \\",
                "  ':arg:' \\",
                "  '--help[display usage information]' \\",
                r"  ':subcommand:((foo\:foo bar))' \",
                "  '*::: := ->subcmd' && return 0",
                "",
                "service=$line[2]",
                "curcontext=${curcontext%:*}-$service:",
                "case $service in",
                "  foo)",
                "    _arguments -s -S -A '-*' : \\",
                "      ':foo:'",
                "  ;;",
                "  bar)",
                "    _arguments -s -S -A '-*' : \\",
                "      ':bar:'",
                "  ;;",
                "esac",
            ]
        );
    }

    #[test]
    fn test_multi_word_arguments_shift_dispatch_index() {
        let command = CommandNode::group("cli")
            .with_param(Parameter::argument("point").with_nargs(2))
            .with_command(CommandNode::new("go"));
        let lines = complete_command(&command, true);
        assert!(lines.contains(&"service=$line[3]".to_string()));
    }

    #[test]
    fn test_nested_groups_indent_without_trailing_whitespace() {
        let command = CommandNode::group("cli").with_command(
            CommandNode::group("remote").with_command(CommandNode::new("add")),
        );
        let lines = complete_command(&command, true);
        assert!(lines.iter().all(|line| !line.ends_with(' ')));
        assert!(lines.contains(&"    service=$line[1]".to_string()));
        assert!(lines.contains(&"      add)".to_string()));
        assert!(lines.contains(&"        _arguments -s -S :".to_string()));
    }

    #[test]
    fn test_subcommand_names_and_help_are_escaped() {
        let command = CommandNode::group("cli")
            .with_command(CommandNode::new("a:b").with_help("Run it: now."))
            .with_command(CommandNode::new("it's").with_help("Don't."));
        let lines = complete_command(&command, true);
        assert_eq!(
            lines[1],
            r#"  ':subcommand:(("a\\:b"\:"run it\\: now" "it'\''s"\:"don'\''t"))' \"#
        );
        assert!(lines.contains(&r"  'it'\''s')".to_string()));
    }
}
