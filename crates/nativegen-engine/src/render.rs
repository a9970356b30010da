//! Overload groups
//!
//! All members sharing a logical name are emitted as one multi-clause
//! declaration, so the whole group must agree on a calling convention:
//!
//! ```text
//!   native add :: Mutable s (ArrayList e) -> e -> ST s Bool
//!              | Mutable s (ArrayList e) -> Int -> e -> ST s ()
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::classify::wrap_return;
use crate::purity::Purity;
use crate::signature::Signature;

/// Indentation of declarations inside a `data ... where` block
pub const INDENT: &str = "  ";

/// Group signatures by logical name, sorted by name.
///
/// Members keep their relative order within a group.
pub fn group_by_name(sigs: Vec<Signature>) -> BTreeMap<String, Vec<Signature>> {
    let mut grouped: BTreeMap<String, Vec<Signature>> = BTreeMap::new();
    for sig in sigs {
        grouped.entry(sig.name.clone()).or_default().push(sig);
    }
    grouped
}

/// One declaration site: a non-empty set of classified overloads
#[derive(Debug, Clone)]
pub struct OverloadGroup {
    members: Vec<Signature>,
    all_pure: bool,
}

impl OverloadGroup {
    /// Reconcile the purity of `members`; `None` if there are none
    pub fn new(members: Vec<Signature>) -> Option<Self> {
        let first = members.first()?;
        // Construction is an effect boundary even when every overload is pure
        let all_pure = !first.is_constructor()
            && members.iter().all(|m| m.return_type.purity.is_pure());

        let members = if all_pure {
            members
        } else {
            members
                .into_iter()
                .map(|m| {
                    if m.return_type.purity.is_pure() {
                        debug!(member = %m.name, "rewrapping pure overload to ST");
                        m.with_return_type(wrap_return(&m.return_type, Purity::St))
                    } else {
                        m
                    }
                })
                .collect()
        };
        Some(Self { members, all_pure })
    }

    /// Check if the group is declared with the `pure` keyword
    pub fn is_pure(&self) -> bool {
        self.all_pure
    }

    /// The reconciled members, first one being the head
    pub fn members(&self) -> &[Signature] {
        &self.members
    }

    /// Render the declaration, terminated by a blank line
    pub fn render(&self) -> String {
        let mut output = String::new();
        let Some((first, rest)) = self.members.split_first() else {
            return output;
        };

        let keyword = if self.all_pure { "pure native" } else { "native" };
        let head_line = format!(
            "{}{} {} :: {}",
            INDENT,
            keyword,
            first.head(),
            first.type_text()
        );
        let column = head_line.find("::").unwrap_or(0);
        output.push_str(&head_line);
        output.push('\n');

        for member in rest {
            output.push_str(&" ".repeat(column));
            output.push_str(" | ");
            output.push_str(&member.type_text());
            output.push('\n');
        }
        output.push('\n');
        output
    }
}

/// Render a group; empty input renders nothing
pub fn render_group(members: Vec<Signature>) -> String {
    OverloadGroup::new(members)
        .map(|group| group.render())
        .unwrap_or_default()
}
