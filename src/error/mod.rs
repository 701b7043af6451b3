mod storage;

pub use storage::StoreError;
