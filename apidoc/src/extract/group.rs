//! Grouping comment lines into definition blocks.
//!
//! A single left-to-right fold. A new block opens when:
//!
//! 1. there is no block yet,
//! 2. the line carries a signature delimiter (`::`),
//! 3. the line carries a heading marker (`######`) and the last line of the
//!    open block has no `##` (so multi-line banners stay together).
//!
//! Every other line joins the open block.

/// Type-signature delimiter opening a new definition.
const SIGNATURE_DELIMITER: &str = "::";

/// Run of `#` that opens a banner block.
const HEADING_MARKER: &str = "######";

/// A previous line containing this belongs to a banner still being drawn.
const HEADING_CONTINUATION: &str = "##";

/// Partition `lines` into definition blocks, preserving order.
///
/// Concatenating the blocks gives back `lines` exactly.
pub fn group_on_definitions<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    lines.iter().fold(Vec::new(), |mut blocks: Vec<Vec<&'a str>>, &line| {
        let continues = blocks.last().is_some_and(|open| !opens_block(open, line));
        match blocks.last_mut() {
            Some(open) if continues => open.push(line),
            _ => blocks.push(vec![line]),
        }
        blocks
    })
}

/// Whether `line` starts a new block after the currently `open` one.
fn opens_block(open: &[&str], line: &str) -> bool {
    if line.contains(SIGNATURE_DELIMITER) {
        return true;
    }
    if line.contains(HEADING_MARKER) {
        // only the last accumulated line is inspected
        let previous = open.last().copied().unwrap_or_default();
        return !previous.contains(HEADING_CONTINUATION);
    }
    false
}
