//! `serde` support. Vectors are represented as fixed-length tuples of their elements.

use std::{fmt, marker::PhantomData};

use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::Vector;

impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for elem in &self.0 {
            tuple.serialize_element(elem)?;
        }
        tuple.end()
    }
}

struct VectorVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for VectorVisitor<T, N> {
    type Value = Vector<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {N} elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut elems = Vec::with_capacity(N);
        while let Some(elem) = seq.next_element()? {
            if elems.len() == N {
                return Err(de::Error::invalid_length(N + 1, &self));
            }
            elems.push(elem);
        }

        match <[T; N]>::try_from(elems) {
            Ok(array) => Ok(Vector(array)),
            Err(elems) => Err(de::Error::invalid_length(elems.len(), &self)),
        }
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, VectorVisitor(PhantomData))
    }
}
