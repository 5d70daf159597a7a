//! Delegate binary serializer for records.
//!
//! The codec never looks inside a record. It hands the record to a
//! [`Schema`] for the binary step and treats the result as opaque bytes.

use std::fmt;
use std::marker::PhantomData;

use crate::error::SchemaError;
use crate::model::Release;

/// Binary serializer/deserializer pair for one record type.
pub trait Schema {
    /// The structured record this schema understands.
    type Record;

    /// Serializes a record into its canonical binary payload.
    fn serialize(&self, record: &Self::Record) -> Result<Vec<u8>, SchemaError>;

    /// Parses a binary payload back into a record.
    fn deserialize(&self, bytes: &[u8]) -> Result<Self::Record, SchemaError>;
}

/// Protobuf schema for any `prost` message.
///
/// Zero-sized; constructing one costs nothing.
pub struct ProtoSchema<M> {
    _message: PhantomData<fn() -> M>,
}

impl<M> ProtoSchema<M> {
    /// Creates the schema.
    pub const fn new() -> Self {
        Self {
            _message: PhantomData,
        }
    }
}

impl<M> Default for ProtoSchema<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for ProtoSchema<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for ProtoSchema<M> {}

impl<M> fmt::Debug for ProtoSchema<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtoSchema")
            .field("message", &std::any::type_name::<M>())
            .finish()
    }
}

impl<M> Schema for ProtoSchema<M>
where
    M: prost::Message + Default,
{
    type Record = M;

    fn serialize(&self, record: &M) -> Result<Vec<u8>, SchemaError> {
        let mut buf = Vec::with_capacity(record.encoded_len());
        record.encode(&mut buf)?;
        Ok(buf)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<M, SchemaError> {
        Ok(M::decode(bytes)?)
    }
}

/// Schema of the persisted release record.
pub type ReleaseSchema = ProtoSchema<Release>;
