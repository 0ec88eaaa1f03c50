//! Plain-text projection of a [`StatusView`], used by text sinks and the
//! `snapshot` command.

use std::fmt;

use crate::render::types::StatusView;

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(f)?;

        if !self.node_fields.is_empty() {
            let width = self
                .node_fields
                .iter()
                .map(|field| field.name.chars().count())
                .max()
                .unwrap_or(0);
            for field in &self.node_fields {
                writeln!(f, "{:<width$}  {}", field.name, field.status, width = width)?;
            }
            writeln!(f)?;
        }

        for field in [&self.summary_field, &self.owner_field] {
            writeln!(f, "{}", field.name)?;
            for line in field.value.lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::aggregate::types::NodeStatus;
    use crate::render::types::{NodeField, StatusView, ViewField};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_text_block_layout() {
        let view = StatusView {
            title: "Status".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            color: 0x0099ff,
            node_fields: vec![
                NodeField {
                    name: "alpha".to_string(),
                    status: NodeStatus::Online,
                },
                NodeField {
                    name: "b".to_string(),
                    status: NodeStatus::UnderMaintenance,
                },
            ],
            summary_field: ViewField {
                name: "Server with Most Resources".to_string(),
                value: "CPU: s2 - 20\nDisk: s1 - 100".to_string(),
                inline: false,
            },
            owner_field: ViewField {
                name: "Server Owners".to_string(),
                value: "CPU: 2\nDisk: 1".to_string(),
                inline: false,
            },
        };

        let expected = "\
Status
2024-05-01 12:00:00 UTC

alpha  Online
b      Under Maintenance

Server with Most Resources
  CPU: s2 - 20
  Disk: s1 - 100
Server Owners
  CPU: 2
  Disk: 1
";
        assert_eq!(view.to_string(), expected);
    }
}
