mod property_index;
mod property_legacy;
mod property_roundtrip;
