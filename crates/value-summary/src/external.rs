//! The self-framed external sub-summary: DOM nodes and DOM exceptions.
//!
//! External summaries are produced by a separate sub-format that is allowed
//! to evolve independently of the outer encoding. They carry their own
//! version byte and a `u32` byte size counted from the start of the size
//! field; after parsing — complete, partial, or skipped — the cursor is
//! restored to the declared end so the outer decode never desynchronizes.

use indexmap::IndexMap;

use crate::constants::{
    EXTERNAL_NODE_SUBKIND_ATTR, EXTERNAL_NODE_SUBKIND_COMMENT, EXTERNAL_NODE_SUBKIND_DOCUMENT,
    EXTERNAL_NODE_SUBKIND_DOCUMENT_FRAGMENT, EXTERNAL_NODE_SUBKIND_ELEMENT,
    EXTERNAL_NODE_SUBKIND_TEXT, EXTERNAL_SUMMARY_EXPECTED_VERSION, EXTERNAL_SUMMARY_KIND_EXCEPTION,
    EXTERNAL_SUMMARY_KIND_NODE, MAX_COLLECTION_VALUES,
};
use crate::decoder::SummaryDecoder;
use crate::error::SummaryError;
use crate::strings::read_string;
use crate::summary::{ExceptionPreview, NodeDetails, NodePreview, ObjectPreview, ObjectSummary};

impl<'a> SummaryDecoder<'a> {
    /// Decodes an `External` object summary.
    ///
    /// The cursor is restored to `size_field_start + declared_size` on
    /// every path; an inner fatal error propagates only after the restore.
    pub(crate) fn read_external_object_summary(
        &mut self,
        result: &mut ObjectSummary,
        depth: u32,
    ) -> Result<(), SummaryError> {
        self.read_class_from_shape(result)?;

        let start_index = self.reader.x;
        let size = self.reader.try_u32()?;
        let inner = self.read_external_body(result, depth);
        self.reader.x = start_index + size as usize;
        inner
    }

    fn read_external_body(
        &mut self,
        result: &mut ObjectSummary,
        depth: u32,
    ) -> Result<(), SummaryError> {
        let version = self.reader.try_u8()?;
        if version != EXTERNAL_SUMMARY_EXPECTED_VERSION {
            // Sub-format skew: leave the summary without a preview.
            return Ok(());
        }

        let kind = self.reader.try_u8()?;
        match kind {
            EXTERNAL_SUMMARY_KIND_NODE => self.read_node_summary(result, depth),
            EXTERNAL_SUMMARY_KIND_EXCEPTION => self.read_exception_summary(result),
            // Other, and any kind this decoder does not know about: the
            // enclosing seek-restore skips the remaining payload.
            _ => Ok(()),
        }
    }

    fn read_node_summary(
        &mut self,
        result: &mut ObjectSummary,
        depth: u32,
    ) -> Result<(), SummaryError> {
        let node_type = self.reader.try_u16()?;
        let node_name = read_string(&mut self.reader)?.to_lowercase();
        let subkind_and_is_connected = self.reader.try_u8()?;
        let subkind = subkind_and_is_connected & 0x7f;
        let is_connected = subkind_and_is_connected >> 7 != 0;

        let details = match subkind {
            EXTERNAL_NODE_SUBKIND_ELEMENT => {
                let attributes_length = self.reader.try_u32()?;
                let mut attributes = IndexMap::new();
                let mut i = 0;
                while i < attributes_length && i < MAX_COLLECTION_VALUES {
                    let name = read_string(&mut self.reader)?;
                    let value = read_string(&mut self.reader)?;
                    attributes.insert(name, value);
                    i += 1;
                }
                NodeDetails::Element {
                    attributes,
                    attributes_length,
                }
            }
            EXTERNAL_NODE_SUBKIND_ATTR => NodeDetails::Attr {
                value: read_string(&mut self.reader)?,
            },
            EXTERNAL_NODE_SUBKIND_DOCUMENT => NodeDetails::Document {
                location: read_string(&mut self.reader)?,
            },
            EXTERNAL_NODE_SUBKIND_DOCUMENT_FRAGMENT => {
                let child_nodes_length = self.reader.try_u32()?;
                let child_nodes = if depth < 1 {
                    let mut children = Vec::new();
                    let mut i = 0;
                    while i < child_nodes_length && i < MAX_COLLECTION_VALUES {
                        children.push(self.read_value_summary(depth + 1)?);
                        i += 1;
                    }
                    Some(children)
                } else {
                    None
                };
                NodeDetails::DocumentFragment {
                    child_nodes_length,
                    child_nodes,
                }
            }
            EXTERNAL_NODE_SUBKIND_TEXT => NodeDetails::Text {
                text_content: read_string(&mut self.reader)?,
            },
            EXTERNAL_NODE_SUBKIND_COMMENT => NodeDetails::Comment {
                text_content: read_string(&mut self.reader)?,
            },
            _ => NodeDetails::Other,
        };

        result.preview = Some(ObjectPreview::Node(NodePreview {
            node_type,
            node_name,
            is_connected,
            details,
        }));
        Ok(())
    }

    fn read_exception_summary(&mut self, result: &mut ObjectSummary) -> Result<(), SummaryError> {
        result.class = Some("Error".to_string());
        let name = read_string(&mut self.reader)?;
        let message = read_string(&mut self.reader)?;
        let code = self.reader.try_u16()?;
        let exception_result = self.reader.try_u32()?;
        let line_number = self.reader.try_u32()?;
        let column_number = self.reader.try_u32()?;
        let stack = read_string(&mut self.reader)?;
        result.preview = Some(ObjectPreview::Exception(ExceptionPreview {
            name,
            message,
            code,
            result: exception_result,
            line_number,
            column_number,
            stack,
        }));
        Ok(())
    }
}
