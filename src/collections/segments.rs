//! Collection of segments

use crate::models::{ApiModel, FromRecord, ModelError, Segment, TypedCollection};
use crate::support::{Collection, CollectionKey, RawRecord};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::ops::{Deref, DerefMut};

/// Segments in the order the API returned them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentsCollection {
    items: Collection<Segment>,
}

impl SegmentsCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segment with the given id
    pub fn get_by_id(&self, id: i64) -> Option<&Segment> {
        self.items.values().find(|segment| segment.id == id)
    }

    /// Outbound payload for a batch request
    ///
    /// Each segment receives its integer collection key as the request
    /// counter, so the first segment of a fresh batch is sent with
    /// `request_id: 1`. Segments under string keys get no counter.
    pub fn to_api(&mut self) -> Value {
        let mut payload = Vec::with_capacity(self.items.len());
        for (key, segment) in self.items.iter_mut() {
            payload.push(segment.to_api(key.as_index()));
        }
        Value::Array(payload)
    }
}

impl TypedCollection for SegmentsCollection {
    type Item = Segment;

    const NAME: &'static str = "segments";

    fn from_collection(items: Collection<Segment>) -> Self {
        Self { items }
    }

    fn items(&self) -> &Collection<Segment> {
        &self.items
    }

    fn record_key(_record: &RawRecord) -> Option<CollectionKey> {
        None
    }

    fn build_item(record: &RawRecord) -> Result<Segment, ModelError> {
        Segment::from_record(record)
    }
}

impl Serialize for SegmentsCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl Deref for SegmentsCollection {
    type Target = Collection<Segment>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl DerefMut for SegmentsCollection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}
