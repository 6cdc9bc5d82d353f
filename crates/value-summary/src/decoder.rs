//! Recursive tagged decode of value summaries.

use indexmap::IndexMap;
use value_summary_buffers::Reader;

use crate::constants::{
    GENERIC_OBJECT_HAS_DENSE_ELEMENTS, GETTER_SETTER_MAGIC, MAX_COLLECTION_VALUES, MIN_INLINE_INT,
    NUMBER_OUT_OF_LINE_MAGIC, OBJECT_KIND_ARRAY_LIKE, OBJECT_KIND_ERROR, OBJECT_KIND_EXTERNAL,
    OBJECT_KIND_FUNCTION, OBJECT_KIND_GENERIC_OBJECT, OBJECT_KIND_MAP_LIKE,
    OBJECT_KIND_NOT_IMPLEMENTED, OBJECT_KIND_PROXY_OBJECT, OBJECT_KIND_WRAPPED_PRIMITIVE_OBJECT,
    SYMBOL_NO_DESCRIPTION, VALUE_TYPE_BIGINT, VALUE_TYPE_BOOLEAN, VALUE_TYPE_DOUBLE,
    VALUE_TYPE_HOLE, VALUE_TYPE_INT32, VALUE_TYPE_NULL, VALUE_TYPE_OBJECT, VALUE_TYPE_STRING,
    VALUE_TYPE_SYMBOL, VALUE_TYPE_UNDEFINED,
};
use crate::error::SummaryError;
use crate::strings::read_string;
use crate::summary::{ObjectPreview, ObjectSummary, PropertyDescriptor, Shape, ValueSummary};

/// Recursive decoder for one tagged value summary.
///
/// Owns the cursor for one in-flight decode pass; the shape table is
/// borrowed read-only from the caller. The `depth` parameter threaded
/// through every recursive call gates *materialization* only: declared
/// counts and lengths are read unconditionally so the cursor always
/// advances exactly as the format specifies.
pub struct SummaryDecoder<'a> {
    pub reader: Reader<'a>,
    pub(crate) shapes: &'a [Shape],
}

impl<'a> SummaryDecoder<'a> {
    /// Creates a decoder positioned at the start of `buffer`.
    pub fn new(buffer: &'a [u8], shapes: &'a [Shape]) -> Self {
        Self {
            reader: Reader::new(buffer),
            shapes,
        }
    }

    /// Creates a decoder positioned at `offset` into `buffer`.
    pub fn at_offset(buffer: &'a [u8], shapes: &'a [Shape], offset: usize) -> Self {
        Self {
            reader: Reader::from_slice(buffer, offset, buffer.len()),
            shapes,
        }
    }

    /// Looks up a shape, treating a missing or empty entry as absent.
    pub(crate) fn shape(&self, shape_id: u32) -> Option<&'a Shape> {
        self.shapes
            .get(shape_id as usize)
            .filter(|shape| !shape.is_empty())
    }

    /// Reads a shape id and, when the shape is known, sets the class name.
    ///
    /// An unknown shape id degrades silently: the summary keeps going
    /// without a class, so one stale shape-table entry never poisons
    /// sibling values.
    pub(crate) fn read_class_from_shape(
        &mut self,
        result: &mut ObjectSummary,
    ) -> Result<(), SummaryError> {
        let shape_id = self.reader.try_u32()?;
        if let Some(shape) = self.shape(shape_id) {
            result.class = Some(shape[0].clone());
        }
        Ok(())
    }

    /// Decodes one tagged value summary.
    ///
    /// The header byte packs the type tag in the low nibble and per-type
    /// flags in the high nibble. Unknown tags are fatal.
    pub fn read_value_summary(&mut self, depth: u32) -> Result<ValueSummary, SummaryError> {
        let header = self.reader.try_u8()?;
        let type_tag = header & 0x0f;
        let flags = (header & 0xf0) >> 4;
        match type_tag {
            VALUE_TYPE_DOUBLE => {
                if flags == NUMBER_OUT_OF_LINE_MAGIC {
                    let value = self.reader.try_f64()?;
                    if value == f64::INFINITY {
                        Ok(ValueSummary::Infinity)
                    } else if value == f64::NEG_INFINITY {
                        Ok(ValueSummary::NegInfinity)
                    } else if value.is_nan() {
                        Ok(ValueSummary::NaN)
                    } else if value == 0.0 && value.is_sign_negative() {
                        Ok(ValueSummary::NegZero)
                    } else {
                        Ok(ValueSummary::Float(value))
                    }
                } else {
                    Ok(ValueSummary::Float(0.0))
                }
            }
            VALUE_TYPE_INT32 => {
                if flags == NUMBER_OUT_OF_LINE_MAGIC {
                    Ok(ValueSummary::Int(self.reader.try_i32()?))
                } else {
                    Ok(ValueSummary::Int(flags as i32 + MIN_INLINE_INT))
                }
            }
            VALUE_TYPE_BOOLEAN => Ok(ValueSummary::Bool(flags != 0)),
            VALUE_TYPE_NULL => Ok(ValueSummary::Null),
            VALUE_TYPE_UNDEFINED => Ok(ValueSummary::Undefined),
            VALUE_TYPE_SYMBOL => {
                if flags & SYMBOL_NO_DESCRIPTION != 0 {
                    Ok(ValueSummary::Symbol(None))
                } else {
                    Ok(ValueSummary::Symbol(Some(read_string(&mut self.reader)?)))
                }
            }
            VALUE_TYPE_BIGINT => Ok(ValueSummary::BigInt(read_string(&mut self.reader)?)),
            VALUE_TYPE_STRING => Ok(ValueSummary::Str(read_string(&mut self.reader)?)),
            VALUE_TYPE_OBJECT => Ok(ValueSummary::Object(Box::new(
                self.read_object_summary(flags, depth)?,
            ))),
            tag => Err(SummaryError::BadValueType(tag)),
        }
    }

    /// Decodes the object payload following an object-tagged header.
    fn read_object_summary(
        &mut self,
        flags: u8,
        depth: u32,
    ) -> Result<ObjectSummary, SummaryError> {
        let mut result = ObjectSummary::default();
        let kind = self.reader.try_u8()?;
        match kind {
            OBJECT_KIND_NOT_IMPLEMENTED => self.read_class_from_shape(&mut result)?,
            OBJECT_KIND_ARRAY_LIKE => self.read_array_like_summary(&mut result, depth)?,
            OBJECT_KIND_MAP_LIKE => self.read_map_like_summary(&mut result, depth)?,
            OBJECT_KIND_FUNCTION => self.read_function_summary(&mut result)?,
            OBJECT_KIND_EXTERNAL => self.read_external_object_summary(&mut result, depth)?,
            OBJECT_KIND_ERROR => self.read_error_object_summary(&mut result)?,
            OBJECT_KIND_WRAPPED_PRIMITIVE_OBJECT => {
                // The unwrapped value first, then the object's own fields.
                result.wrapped_value = Some(self.read_value_summary(depth)?);
                self.read_generic_object_summary(&mut result, flags, depth)?;
            }
            OBJECT_KIND_GENERIC_OBJECT => {
                self.read_generic_object_summary(&mut result, flags, depth)?;
            }
            OBJECT_KIND_PROXY_OBJECT => {
                self.read_class_from_shape(&mut result)?;
                // Proxies never expose contents; the preview is always an
                // empty object regardless of depth.
                result.preview = Some(ObjectPreview::Object {
                    own_properties: IndexMap::new(),
                    own_properties_length: 0,
                });
            }
            kind => return Err(SummaryError::BadObjectKind(kind)),
        }
        Ok(result)
    }

    fn read_array_like_summary(
        &mut self,
        result: &mut ObjectSummary,
        depth: u32,
    ) -> Result<(), SummaryError> {
        let shape_id = self.reader.try_u32()?;
        let Some(shape) = self.shape(shape_id) else {
            return Ok(());
        };
        result.class = Some(shape[0].clone());

        let length = self.reader.try_u32()?;
        let mut items = Vec::new();
        if depth < 1 {
            let mut i = 0;
            while i < length && i < MAX_COLLECTION_VALUES {
                // A hole slot is one tag byte with no payload; it occupies
                // an iteration slot but materializes nothing.
                if self.reader.try_peek()? == VALUE_TYPE_HOLE {
                    self.reader.try_u8()?;
                    i += 1;
                    continue;
                }
                items.push(self.read_value_summary(depth + 1)?);
                i += 1;
            }
        }

        result.preview = Some(ObjectPreview::ArrayLike { length, items });
        Ok(())
    }

    fn read_map_like_summary(
        &mut self,
        result: &mut ObjectSummary,
        depth: u32,
    ) -> Result<(), SummaryError> {
        let shape_id = self.reader.try_u32()?;
        let Some(shape) = self.shape(shape_id) else {
            return Ok(());
        };
        result.class = Some(shape[0].clone());

        let size = self.reader.try_u32()?;
        let mut entries = Vec::new();
        if depth < 1 {
            let mut i = 0;
            while i < size && i < MAX_COLLECTION_VALUES {
                let key = self.read_value_summary(depth + 1)?;
                let value = self.read_value_summary(depth + 1)?;
                entries.push((key, value));
                i += 1;
            }
        }

        result.preview = Some(ObjectPreview::MapLike { size, entries });
        Ok(())
    }

    fn read_function_summary(&mut self, result: &mut ObjectSummary) -> Result<(), SummaryError> {
        result.class = Some("Function".to_string());
        result.name = Some(read_string(&mut self.reader)?);
        let num_parameter_names = self.reader.try_u32()?;
        let mut parameter_names = Vec::new();
        let mut i = 0;
        while i < num_parameter_names && i < MAX_COLLECTION_VALUES {
            parameter_names.push(read_string(&mut self.reader)?);
            i += 1;
        }
        result.parameter_names = Some(parameter_names);
        Ok(())
    }

    fn read_generic_object_summary(
        &mut self,
        result: &mut ObjectSummary,
        flags: u8,
        depth: u32,
    ) -> Result<(), SummaryError> {
        let shape_id = self.reader.try_u32()?;
        let Some(shape) = self.shape(shape_id) else {
            return Ok(());
        };
        result.class = Some(shape[0].clone());

        let has_dense_elements = flags & GENERIC_OBJECT_HAS_DENSE_ELEMENTS != 0;
        let mut own_properties = IndexMap::new();
        let mut own_properties_length = self.reader.try_u32()?;

        if depth < 1 {
            for i in 1..shape.len().min(MAX_COLLECTION_VALUES as usize + 1) {
                let descriptor = if self.reader.try_peek()? == GETTER_SETTER_MAGIC {
                    self.reader.try_u8()?;
                    let get = self.read_value_summary(depth + 1)?;
                    let set = self.read_value_summary(depth + 1)?;
                    PropertyDescriptor::Accessor { get, set }
                } else {
                    PropertyDescriptor::Value(self.read_value_summary(depth + 1)?)
                };
                own_properties.insert(shape[i].clone(), descriptor);
            }
        }

        if has_dense_elements {
            let elements_length = self.reader.try_u32()?;
            if depth < 1 {
                let mut i = 0;
                while i < elements_length && i < MAX_COLLECTION_VALUES {
                    if self.reader.try_peek()? == VALUE_TYPE_HOLE {
                        self.reader.try_u8()?;
                        i += 1;
                        continue;
                    }
                    // Dense elements count toward the reported property
                    // total only when actually materialized.
                    own_properties_length += 1;
                    let value = self.read_value_summary(depth + 1)?;
                    own_properties.insert(i.to_string(), PropertyDescriptor::Value(value));
                    i += 1;
                }
            }
        }

        result.preview = Some(ObjectPreview::Object {
            own_properties,
            own_properties_length,
        });
        Ok(())
    }

    fn read_error_object_summary(
        &mut self,
        result: &mut ObjectSummary,
    ) -> Result<(), SummaryError> {
        let shape_id = self.reader.try_u32()?;
        let Some(shape) = self.shape(shape_id) else {
            return Ok(());
        };
        result.class = Some(shape[0].clone());
        result.is_error = true;

        let name = read_string(&mut self.reader)?;
        let message = read_string(&mut self.reader)?;
        let stack = read_string(&mut self.reader)?;
        let file_name = read_string(&mut self.reader)?;
        let line_number = self.reader.try_u32()?;
        let column_number = self.reader.try_u32()?;
        result.preview = Some(ObjectPreview::Error {
            name,
            message,
            stack,
            file_name,
            line_number,
            column_number,
        });
        Ok(())
    }
}
