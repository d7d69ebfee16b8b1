use std::io::Write;

use aws_sdk_ec2::types::{Instance, InstanceStateName};

use crate::aws::ec2::instance::{get_tag_value, AWS_NAME_TAG};
use crate::Result;

/// Shown when an instance carries no Name tag
pub const UNKNOWN_NAME: &str = "<Unknown>";

/// Shown when an instance has no private IP assigned
pub const UNKNOWN_ADDRESS: &str = "<unknown>";

/// Gap between table columns
const COLUMN_GAP: &str = "  ";

/// Display fields extracted from one API response row.
#[derive(Debug, Clone)]
pub struct InstanceRecord {
    pub id: String,
    pub name: String,
    pub private_address: String,
    pub state: InstanceStateName,
}

impl InstanceRecord {
    pub fn from_instance(instance: &Instance) -> Self {
        let name = get_tag_value(instance, AWS_NAME_TAG)
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        let private_address = instance
            .private_ip_address()
            .unwrap_or(UNKNOWN_ADDRESS)
            .to_string();

        let state = instance
            .state()
            .and_then(|s| s.name().cloned())
            .unwrap_or_else(|| InstanceStateName::from("unknown"));

        Self {
            id: instance.instance_id().unwrap_or_default().to_string(),
            name,
            private_address,
            state,
        }
    }

    fn is_terminated(&self) -> bool {
        self.state == InstanceStateName::Terminated
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Print only private addresses, one per line
    pub quiet: bool,
    /// Include instances in the terminated state
    pub show_terminated: bool,
}

/// Render the result set into `writer`, preserving input order.
///
/// Output is buffered by the caller's writer and flushed exactly once
/// here; zero matching instances produce no output and succeed.
pub fn write_instances<W: Write>(
    writer: &mut W,
    instances: &[Instance],
    options: &RenderOptions,
) -> Result<()> {
    let records: Vec<InstanceRecord> = instances
        .iter()
        .map(InstanceRecord::from_instance)
        .filter(|record| options.show_terminated || !record.is_terminated())
        .collect();

    if options.quiet {
        for record in &records {
            writeln!(writer, "{}", record.private_address)?;
        }
    } else {
        write_table(writer, &records)?;
    }

    writer.flush()?;
    Ok(())
}

/// Left-align the first three columns to the widest value in each; the
/// state column is last and needs no padding.
fn write_table<W: Write>(writer: &mut W, records: &[InstanceRecord]) -> Result<()> {
    let name_width = column_width(records, |r| &r.name);
    let id_width = column_width(records, |r| &r.id);
    let address_width = column_width(records, |r| &r.private_address);

    for record in records {
        writeln!(
            writer,
            "{:<name_width$}{gap}{:<id_width$}{gap}{:<address_width$}{gap}{}",
            record.name,
            record.id,
            record.private_address,
            record.state.as_str(),
            gap = COLUMN_GAP,
        )?;
    }

    Ok(())
}

fn column_width(records: &[InstanceRecord], field: impl Fn(&InstanceRecord) -> &str) -> usize {
    records
        .iter()
        .map(|record| field(record).len())
        .max()
        .unwrap_or(0)
}
