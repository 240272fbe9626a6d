// This file wires up buf-generated protobuf code
// Note: The prost files already include!() the tonic files automatically

pub mod products {
    include!("generated/products/products.rs");
    // products.tonic.rs is auto-included by products.rs
}
