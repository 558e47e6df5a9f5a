use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::io::{Cursor, Write};

use crate::convert::LibraryRecord;
use crate::error::ConvertError;

/// Renders the `applicationLibraries.xml` document IntelliJ reads its global
/// library table from.
pub fn serialize_library_table(records: &[LibraryRecord]) -> Result<String, ConvertError> {
    let bytes = write_library_table(Cursor::new(Vec::new()), records)?.into_inner();
    let mut xml = String::from_utf8(bytes)?;
    if !xml.ends_with('\n') {
        xml.push('\n');
    }
    Ok(xml)
}

/// Streams the library table into `sink` and hands the sink back.
pub fn write_library_table<W: Write>(sink: W, records: &[LibraryRecord]) -> Result<W, ConvertError> {
    let mut writer = Writer::new_with_indent(sink, b' ', 2);
    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    emit(&mut writer, Event::Start(BytesStart::new("application")))?;

    let mut component = BytesStart::new("component");
    component.push_attribute(("name", "libraryTable"));
    if records.is_empty() {
        emit(&mut writer, Event::Empty(component))?;
    } else {
        emit(&mut writer, Event::Start(component))?;
        for record in records {
            write_library(&mut writer, record)?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("component")))?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("application")))?;
    Ok(writer.into_inner())
}

fn write_library<W: Write>(writer: &mut Writer<W>, record: &LibraryRecord) -> Result<(), ConvertError> {
    let mut library = BytesStart::new("library");
    library.push_attribute(("name", record.name.as_str()));
    emit(writer, Event::Start(library))?;

    emit(writer, Event::Start(BytesStart::new("CLASSES")))?;
    let mut root = BytesStart::new("root");
    root.push_attribute(("url", record.classes_url.as_str()));
    emit(writer, Event::Empty(root))?;
    emit(writer, Event::End(BytesEnd::new("CLASSES")))?;

    // IntelliJ expects both sections even when empty.
    emit(writer, Event::Empty(BytesStart::new("JAVADOC")))?;
    emit(writer, Event::Empty(BytesStart::new("SOURCES")))?;

    emit(writer, Event::End(BytesEnd::new("library")))
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), ConvertError> {
    writer.write_event(event).map_err(ConvertError::XmlWrite)
}
