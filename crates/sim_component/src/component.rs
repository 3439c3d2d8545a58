//! Core [`Component`] trait, the closed [`ComponentKind`] set, and the
//! type-erased [`AnyComponent`] value.
//!
//! ## Closed Kind Set
//!
//! Component identity is a fixed enumeration rather than an open registry
//! keyed by runtime type names. Every kind has a stable dense index in
//! `0..ComponentKind::COUNT`, which lets entity storage use a fixed-size array
//! per entity and answer "does E have kind K" in O(1).

use serde::{Deserialize, Serialize};

use crate::render::{Renderable, Texture};
use crate::spatial::{Position, Size, Velocity};
use crate::tags::{GravityAffected, InputControlled};

/// Identifies one of the component kinds an entity may carry.
///
/// The discriminant doubles as the storage index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Position = 0,
    Velocity = 1,
    Size = 2,
    Texture = 3,
    Renderable = 4,
    GravityAffected = 5,
    InputControlled = 6,
}

impl ComponentKind {
    /// Number of component kinds.
    pub const COUNT: usize = 7;

    /// Every kind, in index order.
    pub const ALL: [ComponentKind; Self::COUNT] = [
        ComponentKind::Position,
        ComponentKind::Velocity,
        ComponentKind::Size,
        ComponentKind::Texture,
        ComponentKind::Renderable,
        ComponentKind::GravityAffected,
        ComponentKind::InputControlled,
    ];

    /// Dense storage index of this kind.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// A human-readable name, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ComponentKind::Position => "Position",
            ComponentKind::Velocity => "Velocity",
            ComponentKind::Size => "Size",
            ComponentKind::Texture => "Texture",
            ComponentKind::Renderable => "Renderable",
            ComponentKind::GravityAffected => "GravityAffected",
            ComponentKind::InputControlled => "InputControlled",
        }
    }

    /// Returns `true` for kinds that carry no data.
    #[must_use]
    pub const fn is_tag(self) -> bool {
        matches!(
            self,
            ComponentKind::GravityAffected | ComponentKind::InputControlled
        )
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A component value of any kind.
///
/// This is what entity storage holds. Values are owned: attaching a component
/// moves it into the entity, so no two entities can share an instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnyComponent {
    Position(Position),
    Velocity(Velocity),
    Size(Size),
    Texture(Texture),
    Renderable(Renderable),
    GravityAffected(GravityAffected),
    InputControlled(InputControlled),
}

impl AnyComponent {
    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            AnyComponent::Position(_) => ComponentKind::Position,
            AnyComponent::Velocity(_) => ComponentKind::Velocity,
            AnyComponent::Size(_) => ComponentKind::Size,
            AnyComponent::Texture(_) => ComponentKind::Texture,
            AnyComponent::Renderable(_) => ComponentKind::Renderable,
            AnyComponent::GravityAffected(_) => ComponentKind::GravityAffected,
            AnyComponent::InputControlled(_) => ComponentKind::InputControlled,
        }
    }
}

/// The core component trait.
///
/// Implemented by every concrete component type. It ties the type to its
/// [`ComponentKind`] and gives typed access into an [`AnyComponent`].
///
/// # Examples
///
/// ```rust
/// use sim_component::{AnyComponent, Component, ComponentKind, Velocity};
///
/// let any: AnyComponent = Velocity::new(1.0, 2.0).into();
/// assert_eq!(any.kind(), ComponentKind::Velocity);
/// assert_eq!(Velocity::from_any(&any), Some(&Velocity::new(1.0, 2.0)));
/// ```
pub trait Component: Clone + Send + Sync + 'static + Into<AnyComponent> {
    /// The kind this type is stored under.
    const KIND: ComponentKind;

    /// Borrow `Self` out of a type-erased value, if the kinds match.
    fn from_any(any: &AnyComponent) -> Option<&Self>;

    /// Mutably borrow `Self` out of a type-erased value, if the kinds match.
    fn from_any_mut(any: &mut AnyComponent) -> Option<&mut Self>;
}

macro_rules! impl_component {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Component for $ty {
                const KIND: ComponentKind = ComponentKind::$ty;

                fn from_any(any: &AnyComponent) -> Option<&Self> {
                    match any {
                        AnyComponent::$ty(value) => Some(value),
                        _ => None,
                    }
                }

                fn from_any_mut(any: &mut AnyComponent) -> Option<&mut Self> {
                    match any {
                        AnyComponent::$ty(value) => Some(value),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for AnyComponent {
                fn from(value: $ty) -> Self {
                    AnyComponent::$ty(value)
                }
            }
        )*
    };
}

impl_component!(
    Position,
    Velocity,
    Size,
    Texture,
    Renderable,
    GravityAffected,
    InputControlled,
);
