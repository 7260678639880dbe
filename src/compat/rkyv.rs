use rkyv::{
    bytecheck::CheckBytes,
    rancor::Fallible,
    traits::{CopyOptimization, NoUndef},
    Archive, Deserialize, Portable, Serialize,
};

use crate::flake::Flake;
use crate::uuid::UUID;

macro_rules! impl_rkyv_passthrough {
    ($ty:ty) => {
        unsafe impl NoUndef for $ty {}
        unsafe impl Portable for $ty {}

        impl Archive for $ty {
            type Archived = Self;
            type Resolver = ();

            const COPY_OPTIMIZATION: CopyOptimization<Self> = unsafe { CopyOptimization::enable() };

            fn resolve(&self, (): Self::Resolver, out: rkyv::Place<Self::Archived>) {
                out.write(*self);
            }
        }

        impl<S: Fallible + ?Sized> Serialize<S> for $ty {
            fn serialize(&self, _: &mut S) -> Result<Self::Resolver, <S as Fallible>::Error> {
                Ok(())
            }
        }

        impl<D: Fallible + ?Sized> Deserialize<Self, D> for $ty {
            fn deserialize(&self, _: &mut D) -> Result<Self, <D as Fallible>::Error> {
                Ok(*self)
            }
        }

        unsafe impl<C: Fallible + ?Sized> CheckBytes<C> for $ty {
            unsafe fn check_bytes(_: *const Self, _: &mut C) -> Result<(), C::Error> {
                Ok(())
            }
        }
    };
}

impl_rkyv_passthrough!(UUID);
impl_rkyv_passthrough!(Flake);

#[cfg(test)]
mod tests {
    use rkyv::{deserialize, rancor::Error, to_bytes};

    use crate::flake::Flake;
    use crate::uuid::UUID;

    #[test]
    fn uuid_roundtrip() {
        let original = crate::uuid::v4();
        let bytes = to_bytes::<Error>(&original).expect("serialize");
        let archived = unsafe { rkyv::access_unchecked::<UUID>(&bytes) };
        assert_eq!(*archived, original);
        let back = deserialize::<UUID, Error>(archived).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn flake_roundtrip() {
        let original = Flake::new();
        let bytes = to_bytes::<Error>(&original).expect("serialize");
        let archived = unsafe { rkyv::access_unchecked::<Flake>(&bytes) };
        assert_eq!(*archived, original);
        let back = deserialize::<Flake, Error>(archived).unwrap();
        assert_eq!(back, original);
    }
}
