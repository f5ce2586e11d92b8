//! Mapping between `rrda_domain::RecordType` and `hickory_proto::rr::RecordType`.
//!
//! Both sides are keyed by the IANA type code, so the conversion goes
//! through `u16` rather than matching variant by variant.

use rrda_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }
}
