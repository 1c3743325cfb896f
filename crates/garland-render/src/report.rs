// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Console and JSON views of an assignment.

use garland_model::{assignment::Assignment, roster::Roster};
use serde_json::Value;
use std::io;

/// Writes a human-readable giver/recipient table.
///
/// # Panics
///
/// Panics if `assignment` was produced for a roster of a different size.
pub fn write_listing<W: io::Write>(
    out: &mut W,
    roster: &Roster,
    assignment: &Assignment,
) -> io::Result<()> {
    writeln!(out, "Gift Assignments")?;
    writeln!(out)?;

    if assignment.is_empty() {
        writeln!(out, "   (No participants)")?;
        return Ok(());
    }

    let longest = roster
        .names()
        .iter()
        .map(|name| name.len())
        .max()
        .unwrap_or(0);
    let giver_width = longest.max("Giver".len());
    let recipient_width = longest.max("Recipient".len());

    writeln!(
        out,
        "   {:<giver_width$} | {:<recipient_width$}",
        "Giver", "Recipient"
    )?;
    writeln!(out, "   {:-<giver_width$}-+-{:-<recipient_width$}", "", "")?;
    for (giver, recipient) in assignment.named_pairs(roster) {
        writeln!(
            out,
            "   {:<giver_width$} | {:<recipient_width$}",
            giver, recipient
        )?;
    }

    Ok(())
}

/// Renders the assignment as a JSON object mapping giver to recipient.
///
/// # Panics
///
/// Panics if `assignment` was produced for a roster of a different size.
pub fn to_json(roster: &Roster, assignment: &Assignment) -> Value {
    let mut object = serde_json::Map::with_capacity(assignment.len());
    for (giver, recipient) in assignment.named_pairs(roster) {
        object.insert(giver.to_owned(), Value::String(recipient.to_owned()));
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use garland_model::{entry::ParticipantEntry, index::ParticipantIndex};

    fn pi(index: usize) -> ParticipantIndex {
        ParticipantIndex::new(index)
    }

    fn fixture() -> (Roster, Assignment) {
        let roster = Roster::from_entries(&[
            ParticipantEntry::named("Pat"),
            ParticipantEntry::named("Lee"),
            ParticipantEntry::named("Sam"),
        ])
        .unwrap();
        let assignment = Assignment::new(vec![pi(1), pi(2), pi(0)]);
        (roster, assignment)
    }

    #[test]
    fn test_listing_formatting() {
        let (roster, assignment) = fixture();

        let mut out = Vec::new();
        write_listing(&mut out, &roster, &assignment).unwrap();
        let listing = String::from_utf8(out).unwrap();

        let mut expected = String::new();
        expected.push_str("Gift Assignments\n");
        expected.push('\n');
        expected.push_str("   Giver | Recipient\n");
        expected.push_str("   ------+----------\n");
        expected.push_str("   Pat   | Lee      \n");
        expected.push_str("   Lee   | Sam      \n");
        expected.push_str("   Sam   | Pat      \n");

        assert_eq!(listing, expected);
    }

    #[test]
    fn test_listing_for_empty_assignment() {
        let roster = Roster::from_entries(&[]).unwrap();
        let assignment = Assignment::empty();

        let mut out = Vec::new();
        write_listing(&mut out, &roster, &assignment).unwrap();
        let listing = String::from_utf8(out).unwrap();

        assert!(listing.contains("(No participants)"));
    }

    #[test]
    fn test_json_object_maps_givers_to_recipients() {
        let (roster, assignment) = fixture();

        let json = to_json(&roster, &assignment);
        assert_eq!(json["Pat"], "Lee");
        assert_eq!(json["Lee"], "Sam");
        assert_eq!(json["Sam"], "Pat");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}
