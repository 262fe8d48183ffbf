//! Pre-parse splitting of colcon pass-through arguments
//!
//! `--colcon-build-args` takes an open-ended run of tokens destined for
//! colcon rather than for hatch, terminated by a literal `--` or the end of
//! the line. That shape does not fit a flag parser's model, so the raw argv
//! is split here before clap sees it: the markers and their consumed tokens
//! are removed from the tool argument stream, and anything after a consumed
//! `--` is spliced back in at the marker's position.

/// Marker flag introducing a run of pass-through tokens.
pub const COLCON_ARGS_FLAG: &str = "--colcon-build-args";

/// Verbs that accept pass-through colcon arguments.
pub const PASSTHROUGH_VERBS: &[&str] = &["build", "config", "test"];

/// Result of splitting a raw argument list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SplitArgs {
    /// Arguments hatch itself parses
    pub tool_args: Vec<String>,

    /// Accumulated pass-through arguments for colcon
    pub colcon_args: Vec<String>,
}

/// Split the post-verb argument list for `verb`.
///
/// Marker occurrences are processed from the last one backward so earlier
/// indices stay valid; multiple occurrences accumulate into one pass-through
/// list in that reverse-scan order. Verbs that take no pass-through
/// arguments get the input back untouched.
pub fn split_colcon_args(verb: &str, args: &[String]) -> SplitArgs {
    if !PASSTHROUGH_VERBS.contains(&verb) {
        return SplitArgs {
            tool_args: args.to_vec(),
            colcon_args: Vec::new(),
        };
    }

    let markers: Vec<usize> = args
        .iter()
        .enumerate()
        .filter(|(_, token)| *token == COLCON_ARGS_FLAG)
        .map(|(index, _)| index)
        .collect();

    let mut head = args.to_vec();
    let mut tail = Vec::new();
    let mut colcon_args = Vec::new();

    for marker in markers.into_iter().rev() {
        let (new_head, consumed, after_separator) = split_at_marker(&head, marker);
        head = new_head;
        tail.extend(after_separator);
        colcon_args.extend(consumed);
    }

    head.extend(tail);
    SplitArgs {
        tool_args: head,
        colcon_args,
    }
}

/// Cut `args` at a marker index: everything before the marker, the consumed
/// run up to the next `--` (or end), and the remainder after that `--`.
fn split_at_marker(args: &[String], marker: usize) -> (Vec<String>, Vec<String>, Vec<String>) {
    let start = marker + 1;
    let separator = args[start..]
        .iter()
        .position(|token| token == "--")
        .map(|offset| start + offset);

    match separator {
        Some(end) => (
            args[..marker].to_vec(),
            args[start..end].to_vec(),
            args[end + 1..].to_vec(),
        ),
        None => (args[..marker].to_vec(), args[start..].to_vec(), Vec::new()),
    }
}

/// Locate the verb in the raw post-program argv and run the splitter over
/// the post-verb tokens. Returns the argv clap should parse and the
/// extracted pass-through list.
pub fn preprocess(argv: &[String]) -> (Vec<String>, Vec<String>) {
    let Some(verb_index) = argv.iter().position(|arg| !arg.starts_with('-')) else {
        return (argv.to_vec(), Vec::new());
    };

    let split = split_colcon_args(&argv[verb_index], &argv[verb_index + 1..]);

    let mut processed = argv[..=verb_index].to_vec();
    processed.extend(split.tool_args);
    (processed, split.colcon_args)
}
