// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductsRequest {
    #[prost(string, repeated, tag="1")]
    pub ids: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// Compact product projection for cross-service consumption.
/// Price is rendered as a fixed two-decimal string.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProductSummary {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub price: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub category: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductsResponse {
    #[prost(message, repeated, tag="1")]
    pub products: ::prost::alloc::vec::Vec<ProductSummary>,
}
include!("products.tonic.rs");
// @@protoc_insertion_point(module)
