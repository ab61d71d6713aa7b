//! Boundary to the actor system's reference resolver.

use crate::address::Address;

/// Resolves a serialized actor path into a live local handle
///
/// The codec hands over the path string exactly as it arrived on the wire,
/// together with the local system address so relative paths can be
/// completed. Resolution never fails from the codec's point of view; a
/// resolver maps unknown paths to whatever stands in for a dead reference.
pub trait ActorRefResolver {
    /// Handle type produced by this resolver
    type Handle;

    /// Resolve an absolute or locally relative path
    fn resolve(&self, path: &str, local_address: &Address) -> Self::Handle;
}

impl<R: ActorRefResolver + ?Sized> ActorRefResolver for &R {
    type Handle = R::Handle;

    fn resolve(&self, path: &str, local_address: &Address) -> Self::Handle {
        (**self).resolve(path, local_address)
    }
}
