//! Feeds command lines into a [`Session`] and prints what they produce.

use std::io::{self, BufRead, Write};

use crate::list::{ListAction, ListProps};
use crate::mvi::ActionRecord;

use super::parser::parse_line;
use super::session::{Outcome, Session};

/// Counters for one run over an input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub rejected: usize,
}

/// Execute every line of `input` against `session`.
///
/// `show` and `history` output goes to `out`. Lines that fail to parse are
/// reported on `err` with their 1-based line number and skipped.
pub fn run_lines<B, W, E>(
    session: &mut Session,
    input: B,
    out: &mut W,
    err: &mut E,
) -> io::Result<RunSummary>
where
    B: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = RunSummary::default();

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(line = number + 1, error = %e, "Rejected command");
                writeln!(err, "line {}: {}", number + 1, e)?;
                summary.rejected += 1;
                continue;
            }
        };

        summary.executed += 1;
        match session.execute(command) {
            Outcome::Show(props) => write!(out, "{}", render_props(&props))?,
            Outcome::History(history) => write!(out, "{}", render_history(&history)?)?,
            Outcome::Dispatched(_) | Outcome::SelectionChanged | Outcome::Skipped => {}
        }
    }

    Ok(summary)
}

/// Plain text form of the list: an error line (if any) then one row per item.
pub fn render_props(props: &ListProps) -> String {
    let mut text = String::new();
    if let Some(error) = &props.error {
        text.push_str(&format!("Error! {}\n", error));
    }
    for (index, item) in props.items.iter().enumerate() {
        text.push_str(&format!("[{}] {}\n", index, item));
    }
    text
}

/// One line per recorded action: sequence, kind and JSON form.
pub fn render_history(history: &[ActionRecord<ListAction>]) -> serde_json::Result<String> {
    history
        .iter()
        .map(|record| {
            let json = serde_json::to_string(&record.action)?;
            Ok(format!("#{} {} {}\n", record.sequence, record.kind, json))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ListState;
    use crate::mvi::Store;

    fn run(script: &str) -> (String, String, RunSummary, Session) {
        let mut session = Session::new(Store::new(ListState::default()), " - Edited");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = run_lines(&mut session, script.as_bytes(), &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            summary,
            session,
        )
    }

    #[test]
    fn show_prints_rows() {
        let (out, err, summary, _) = run("add world\nshow\n");
        assert_eq!(out, "[0] hi\n[1] hello\n[2] world\n");
        assert!(err.is_empty());
        assert_eq!(summary, RunSummary { executed: 2, rejected: 0 });
    }

    #[test]
    fn show_prints_error_first() {
        let (out, _, _, _) = run("add\nshow\nclear-error\nshow\n");
        assert_eq!(
            out,
            "Error! Item cannot be empty\n[0] hi\n[1] hello\n[0] hi\n[1] hello\n"
        );
    }

    #[test]
    fn bad_lines_are_reported_and_skipped() {
        let (_, err, summary, session) = run("# start\nbogus\ndelete 0\n\ndelete x\n");
        assert_eq!(
            err,
            "line 2: Unknown command 'bogus'\n\
             line 5: Invalid index 'x': expected a non-negative integer\n"
        );
        assert_eq!(summary, RunSummary { executed: 1, rejected: 2 });
        assert_eq!(session.props().items, vec!["hello"]);
    }

    #[test]
    fn render_history_writes_unknown_as_bare_type() {
        let history = vec![ActionRecord {
            sequence: 4,
            kind: "UNKNOWN",
            action: ListAction::Unknown,
        }];
        assert_eq!(
            render_history(&history).unwrap(),
            "#4 UNKNOWN {\"type\":\"UNKNOWN\"}\n"
        );
    }

    #[test]
    fn history_lists_dispatched_actions() {
        let (out, _, _, _) = run("add a\ndelete 0\nhistory\n");
        assert_eq!(
            out,
            "#0 ADD_ITEM {\"type\":\"ADD_ITEM\",\"payload\":{\"item\":\"a\"}}\n\
             #1 DELETE_ITEM {\"type\":\"DELETE_ITEM\",\"payload\":{\"index\":0}}\n"
        );
    }
}
