//! Thing concepts
//!
//! Owners of an attribute may be entities, relations, or other attributes.
//! They are decoded into [`Thing`] values; equality is by IID plus concrete
//! kind.

use std::hash::{Hash, Hasher};

use thingdb_core::{Iid, ThingType};

use crate::attribute::Attribute;

/// Fields shared by entities and relations; equality is by IID
#[derive(Debug, Clone)]
struct ThingData {
    iid: Iid,
    thing_type: ThingType,
    inferred: bool,
}

impl PartialEq for ThingData {
    fn eq(&self, other: &Self) -> bool {
        self.iid == other.iid
    }
}

impl Eq for ThingData {}

impl Hash for ThingData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iid.hash(state);
    }
}

macro_rules! thing_kind {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(ThingData);

        impl $name {
            #[doc = concat!("Create ", $kind, " concept")]
            pub fn new(iid: Iid, thing_type: ThingType, inferred: bool) -> Self {
                Self(ThingData {
                    iid,
                    thing_type,
                    inferred,
                })
            }

            /// Concept identifier
            pub fn iid(&self) -> &Iid {
                &self.0.iid
            }

            /// Type of this thing
            pub fn get_type(&self) -> &ThingType {
                &self.0.thing_type
            }

            /// Whether the server produced this thing by inference
            pub fn is_inferred(&self) -> bool {
                self.0.inferred
            }
        }
    };
}

thing_kind!(
    /// An entity instance
    Entity,
    "an entity"
);

thing_kind!(
    /// A relation instance
    Relation,
    "a relation"
);

/// Any thing instance
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Thing {
    /// An entity
    Entity(Entity),
    /// A relation
    Relation(Relation),
    /// An attribute
    Attribute(Attribute),
}

impl Thing {
    /// Concept identifier
    pub fn iid(&self) -> &Iid {
        match self {
            Thing::Entity(e) => e.iid(),
            Thing::Relation(r) => r.iid(),
            Thing::Attribute(a) => a.iid(),
        }
    }

    /// Type of this thing
    pub fn thing_type(&self) -> ThingType {
        match self {
            Thing::Entity(e) => e.get_type().clone(),
            Thing::Relation(r) => r.get_type().clone(),
            Thing::Attribute(a) => ThingType::from(a.get_type().clone()),
        }
    }

    /// Whether the server produced this thing by inference
    pub fn is_inferred(&self) -> bool {
        match self {
            Thing::Entity(e) => e.is_inferred(),
            Thing::Relation(r) => r.is_inferred(),
            Thing::Attribute(a) => a.is_inferred(),
        }
    }

    /// The entity, if this is one
    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Thing::Entity(e) => Some(e),
            _ => None,
        }
    }

    /// The relation, if this is one
    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            Thing::Relation(r) => Some(r),
            _ => None,
        }
    }

    /// The attribute, if this is one
    pub fn as_attribute(&self) -> Option<&Attribute> {
        match self {
            Thing::Attribute(a) => Some(a),
            _ => None,
        }
    }

    /// Consume into the attribute, if this is one
    pub fn into_attribute(self) -> Option<Attribute> {
        match self {
            Thing::Attribute(a) => Some(a),
            _ => None,
        }
    }
}

impl From<Entity> for Thing {
    fn from(e: Entity) -> Self {
        Thing::Entity(e)
    }
}

impl From<Relation> for Thing {
    fn from(r: Relation) -> Self {
        Thing::Relation(r)
    }
}

impl From<Attribute> for Thing {
    fn from(a: Attribute) -> Self {
        Thing::Attribute(a)
    }
}
