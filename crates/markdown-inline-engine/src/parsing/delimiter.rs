use crate::{
    error::InlineError,
    text::{InlineKind, InlineTextNode},
};

/// Splits every `Plain` node on paired occurrences of `delimiter`.
///
/// Text between an opening and the next closing `delimiter` becomes a node of
/// `kind`, even when empty. Text around the pairs stays `Plain`; empty
/// surrounding text produces no node. Non-`Plain` nodes are copied through in
/// place.
///
/// # Errors
/// - [`InlineError::EmptyDelimiter`] if `delimiter` is empty.
/// - [`InlineError::UnterminatedDelimiter`] if a node has an opening
///   delimiter with no closing one. Nothing is returned in that case.
///
/// # Ordering
/// Each call is one pass. When a multi-character delimiter starts with a
/// shorter one (`**` and `*`), the longer one must run first.
pub fn split_nodes_delimiter(
    nodes: &[InlineTextNode],
    delimiter: &str,
    kind: InlineKind,
) -> Result<Vec<InlineTextNode>, InlineError> {
    if delimiter.is_empty() {
        return Err(InlineError::EmptyDelimiter);
    }

    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !node.is_plain() {
            out.push(node.clone());
            continue;
        }
        split_text(node.text(), delimiter, kind, &mut out)?;
    }

    log::trace!(
        "delimiter pass {delimiter:?} -> {kind}: {} nodes in, {} nodes out",
        nodes.len(),
        out.len()
    );
    Ok(out)
}

/// Walks `text` pair by pair, pushing the resulting nodes onto `out`.
fn split_text(
    text: &str,
    delimiter: &str,
    kind: InlineKind,
    out: &mut Vec<InlineTextNode>,
) -> Result<(), InlineError> {
    let mut rest = text;
    loop {
        let Some(open) = rest.find(delimiter) else {
            if !rest.is_empty() {
                out.push(InlineTextNode::plain(rest));
            }
            return Ok(());
        };

        let inner_start = open + delimiter.len();
        let Some(inner_len) = rest[inner_start..].find(delimiter) else {
            return Err(InlineError::UnterminatedDelimiter {
                delimiter: delimiter.to_string(),
                text: text.to_string(),
            });
        };
        let inner_end = inner_start + inner_len;

        if open > 0 {
            out.push(InlineTextNode::plain(&rest[..open]));
        }
        out.push(InlineTextNode::new(&rest[inner_start..inner_end], kind));

        rest = &rest[inner_end + delimiter.len()..];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::kinds::{CodeSpan, Emphasis, Strong};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn plain(s: &str) -> InlineTextNode {
        InlineTextNode::plain(s)
    }

    #[test]
    fn splits_code_spans_across_nodes() {
        let nodes = vec![
            plain("This is text with a `code block` word"),
            plain("This is a `bold` word for the best coding `part of my life`"),
        ];
        let out = split_nodes_delimiter(&nodes, CodeSpan::DELIMITER, InlineKind::Code).unwrap();
        assert_eq!(
            out,
            vec![
                plain("This is text with a "),
                InlineTextNode::new("code block", InlineKind::Code),
                plain(" word"),
                plain("This is a "),
                InlineTextNode::new("bold", InlineKind::Code),
                plain(" word for the best coding "),
                InlineTextNode::new("part of my life", InlineKind::Code),
            ]
        );
    }

    #[test]
    fn splits_bold_with_two_character_delimiter() {
        let nodes = vec![plain("This is **text** with a **code block** word")];
        let out = split_nodes_delimiter(&nodes, Strong::DELIMITER, InlineKind::Bold).unwrap();
        assert_eq!(
            out,
            vec![
                plain("This is "),
                InlineTextNode::new("text", InlineKind::Bold),
                plain(" with a "),
                InlineTextNode::new("code block", InlineKind::Bold),
                plain(" word"),
            ]
        );
    }

    #[rstest]
    #[case("**", InlineKind::Bold)]
    #[case("_", InlineKind::Italic)]
    #[case("`", InlineKind::Code)]
    fn single_pair_yields_three_nodes(#[case] delim: &str, #[case] kind: InlineKind) {
        let text = format!("a{delim}b{delim}c");
        let out = split_nodes_delimiter(&[plain(&text)], delim, kind).unwrap();
        assert_eq!(
            out,
            vec![plain("a"), InlineTextNode::new("b", kind), plain("c")]
        );
    }

    #[rstest]
    #[case("no delimiters at all")]
    #[case("snake case words")]
    #[case("ünïcödé ✓")]
    fn text_without_delimiter_is_unchanged(#[case] text: &str) {
        let nodes = vec![plain(text)];
        let out = split_nodes_delimiter(&nodes, Emphasis::DELIMITER, InlineKind::Italic).unwrap();
        assert_eq!(out, nodes);
    }

    #[test]
    fn unmatched_delimiter_is_an_error() {
        let err = split_nodes_delimiter(
            &[plain("fine"), plain("a _dangling span")],
            Emphasis::DELIMITER,
            InlineKind::Italic,
        )
        .unwrap_err();
        assert_eq!(
            err,
            InlineError::UnterminatedDelimiter {
                delimiter: "_".to_string(),
                text: "a _dangling span".to_string(),
            }
        );
    }

    #[test]
    fn third_delimiter_without_partner_is_an_error() {
        let err = split_nodes_delimiter(&[plain("`a` and `b")], "`", InlineKind::Code).unwrap_err();
        assert!(matches!(err, InlineError::UnterminatedDelimiter { .. }));
    }

    #[test]
    fn empty_delimiter_is_rejected() {
        let err = split_nodes_delimiter(&[plain("abc")], "", InlineKind::Bold).unwrap_err();
        assert_eq!(err, InlineError::EmptyDelimiter);
    }

    #[test]
    fn empty_interior_is_kept() {
        let out = split_nodes_delimiter(&[plain("a****b")], "**", InlineKind::Bold).unwrap();
        assert_eq!(
            out,
            vec![plain("a"), InlineTextNode::new("", InlineKind::Bold), plain("b")]
        );
    }

    #[test]
    fn empty_surrounding_text_is_dropped() {
        let out = split_nodes_delimiter(&[plain("`only`"), plain("")], "`", InlineKind::Code)
            .unwrap();
        assert_eq!(out, vec![InlineTextNode::new("only", InlineKind::Code)]);
    }

    #[test]
    fn non_plain_nodes_pass_through_in_place() {
        let nodes = vec![
            InlineTextNode::new("already **bold**", InlineKind::Bold),
            plain("x **y**"),
            InlineTextNode::link("a **b** c", "https://a"),
        ];
        let out = split_nodes_delimiter(&nodes, "**", InlineKind::Bold).unwrap();
        assert_eq!(
            out,
            vec![
                nodes[0].clone(),
                plain("x "),
                InlineTextNode::new("y", InlineKind::Bold),
                nodes[2].clone(),
            ]
        );
    }

    #[test]
    fn sequential_passes_compose() {
        let nodes = vec![plain("**bold** then _italic_ and `code`")];
        let out = split_nodes_delimiter(&nodes, "**", InlineKind::Bold).unwrap();
        let out = split_nodes_delimiter(&out, "_", InlineKind::Italic).unwrap();
        let out = split_nodes_delimiter(&out, "`", InlineKind::Code).unwrap();
        assert_eq!(
            out,
            vec![
                InlineTextNode::new("bold", InlineKind::Bold),
                plain(" then "),
                InlineTextNode::new("italic", InlineKind::Italic),
                plain(" and "),
                InlineTextNode::new("code", InlineKind::Code),
            ]
        );
    }

    #[test]
    fn segments_split_independently_match_split_together() {
        let a = plain("one **two** _three_");
        let b = plain("_four_ **five**");

        let passes = |nodes: &[InlineTextNode]| {
            let out = split_nodes_delimiter(nodes, "**", InlineKind::Bold).unwrap();
            split_nodes_delimiter(&out, "_", InlineKind::Italic).unwrap()
        };

        let together = passes(&[a.clone(), b.clone()]);
        let mut separately = passes(&[a]);
        separately.extend(passes(&[b]));
        assert_eq!(together, separately);
    }

    #[test]
    fn many_pairs_do_not_recurse() {
        let text = "x `y` ".repeat(20_000);
        let out = split_nodes_delimiter(&[plain(&text)], "`", InlineKind::Code).unwrap();
        assert_eq!(out.len(), 40_001);
        assert_eq!(out.last(), Some(&plain(" ")));
    }
}
