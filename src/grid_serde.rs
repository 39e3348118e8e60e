use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::index_vector::IndexVector;
use crate::ixvec::IxVec;
use crate::{Grid, MAX_NDIM};

/// **Requires crate feature `"serde"`**
impl Serialize for IxVec {
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for elt in self {
            seq.serialize_element(elt)?;
        }
        seq.end()
    }
}

struct IxVecVisitor;

impl<'de> Visitor<'de> for IxVecVisitor {
    type Value = IxVec;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a sequence of at most {} integers", MAX_NDIM)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<IxVec, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut v = IxVec::zeros(0);
        while let Some(elem) = seq.next_element()? {
            if v.len() == MAX_NDIM {
                return Err(de::Error::invalid_length(v.len() + 1, &self));
            }
            v.push(elem);
        }
        Ok(v)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for IxVec {
    fn deserialize<D>(deserializer: D) -> Result<IxVec, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(IxVecVisitor)
    }
}

static GRID_FIELDS: &[&str] = &["origin", "extent", "layout"];

/// **Requires crate feature `"serde"`**
impl<I> Serialize for Grid<I>
where
    I: IndexVector + Serialize,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let mut state = serializer.serialize_struct("Grid", 3)?;
        state.serialize_field("origin", self.origin())?;
        state.serialize_field("extent", self.extent())?;
        state.serialize_field("layout", &self.layout())?;
        state.end()
    }
}

fn verify_lengths<I, E>(origin: &I, extent: &I, layout: Option<&I>) -> Result<(), E>
where
    I: IndexVector,
    E: de::Error,
{
    if origin.len() != extent.len() {
        return Err(de::Error::custom(
            "origin and extent must have the same length",
        ));
    }
    if let Some(layout) = layout {
        if layout.len() != extent.len() {
            return Err(de::Error::custom(
                "layout and extent must have the same length",
            ));
        }
    }
    Ok(())
}

enum GridField {
    Origin,
    Extent,
    Layout,
}

impl<'de> Deserialize<'de> for GridField {
    fn deserialize<D>(deserializer: D) -> Result<GridField, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GridFieldVisitor;

        impl<'de> Visitor<'de> for GridFieldVisitor {
            type Value = GridField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("`origin`, `extent` or `layout`")
            }

            fn visit_str<E>(self, value: &str) -> Result<GridField, E>
            where
                E: de::Error,
            {
                match value {
                    "origin" => Ok(GridField::Origin),
                    "extent" => Ok(GridField::Extent),
                    "layout" => Ok(GridField::Layout),
                    other => Err(de::Error::unknown_field(other, GRID_FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(GridFieldVisitor)
    }
}

struct GridVisitor<I> {
    _marker: PhantomData<I>,
}

impl<'de, I> Visitor<'de> for GridVisitor<I>
where
    I: IndexVector + Deserialize<'de>,
{
    type Value = Grid<I>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a Grid with fields origin, extent and layout")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Grid<I>, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let origin: I = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let extent: I = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let layout: Option<I> = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;
        verify_lengths(&origin, &extent, layout.as_ref())?;
        Ok(Grid {
            origin,
            extent,
            layout,
        })
    }

    fn visit_map<A>(self, mut map: A) -> Result<Grid<I>, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut origin: Option<I> = None;
        let mut extent: Option<I> = None;
        let mut layout: Option<Option<I>> = None;
        while let Some(key) = map.next_key()? {
            match key {
                GridField::Origin => {
                    if origin.is_some() {
                        return Err(de::Error::duplicate_field("origin"));
                    }
                    origin = Some(map.next_value()?);
                }
                GridField::Extent => {
                    if extent.is_some() {
                        return Err(de::Error::duplicate_field("extent"));
                    }
                    extent = Some(map.next_value()?);
                }
                GridField::Layout => {
                    if layout.is_some() {
                        return Err(de::Error::duplicate_field("layout"));
                    }
                    layout = Some(map.next_value()?);
                }
            }
        }
        let origin = origin.ok_or_else(|| de::Error::missing_field("origin"))?;
        let extent = extent.ok_or_else(|| de::Error::missing_field("extent"))?;
        let layout = layout.unwrap_or(None);
        verify_lengths(&origin, &extent, layout.as_ref())?;
        Ok(Grid {
            origin,
            extent,
            layout,
        })
    }
}

/// **Requires crate feature `"serde"`**
impl<'de, I> Deserialize<'de> for Grid<I>
where
    I: IndexVector + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Grid<I>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct(
            "Grid",
            GRID_FIELDS,
            GridVisitor {
                _marker: PhantomData,
            },
        )
    }
}
