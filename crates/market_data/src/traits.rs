/// Conversion from a wire payload into the shared domain model.
pub trait RemoteResponse<T> {
    fn to_model(&self) -> T;
}
