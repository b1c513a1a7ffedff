use crate::connection::ConnectionSet;
use csv::WriterBuilder;
use std::io::Write;

/// Placeholder value written for every connection, only there to keep the triples well formed.
pub const CONNECTION_VALUE: &[u8] = b"1";

/// Writes `<size> <size> <count>` followed by one `<row> <col> 1` line per connection,
/// in row-then-column order.
pub fn write_crs<W: Write>(
    size: u32,
    connections: &ConnectionSet,
    writer: W,
) -> Result<(), std::io::Error> {
    let mut writer = WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_writer(writer);

    let mut size_buf = itoa::Buffer::new();
    let mut count_buf = itoa::Buffer::new();
    let size = size_buf.format(size);
    writer.write_record(&[
        size.as_bytes(),
        size.as_bytes(),
        count_buf.format(connections.len()).as_bytes(),
    ])?;

    let mut row_buf = itoa::Buffer::new();
    let mut col_buf = itoa::Buffer::new();
    for connection in connections {
        writer.write_record(&[
            row_buf.format(connection.row).as_bytes(),
            col_buf.format(connection.col).as_bytes(),
            CONNECTION_VALUE,
        ])?;
    }

    writer.flush()
}
