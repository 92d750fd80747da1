//! ECS components for game objects.
//!
//! Units, buildings, iron fields, shells and particles are all entities built
//! from the components below. Every drawable entity carries a
//! [`mapposition::MapPosition`], a [`boxcollider::BoxCollider`], a
//! [`sprite::Sprite`] and a [`zindex::ZIndex`].
//!
//! Submodules overview:
//! - [`boxcollider`] – bounding rectangle relative to the position
//! - [`explored`] – enemy building seen by the player
//! - [`facing`] – heading and barrel recoil
//! - [`gameobject`] – object catalogue plus unit/building markers
//! - [`harvester`] – mining automation state
//! - [`health`] – hit points and the under-attack flag
//! - [`ironfield`] – iron deposit
//! - [`mapposition`] – logical world position
//! - [`orders`] – movement orders and speed
//! - [`particle`] – fading effect dot
//! - [`projectile`] – homing shell
//! - [`selected`] – player selection marker
//! - [`sprite`] – primitive silhouette and colour
//! - [`team`] – GDI or NOD ownership
//! - [`weapon`] – weapon stats and cooldown
//! - [`zindex`] – draw order layer

pub mod boxcollider;
pub mod explored;
pub mod facing;
pub mod gameobject;
pub mod harvester;
pub mod health;
pub mod ironfield;
pub mod mapposition;
pub mod orders;
pub mod particle;
pub mod projectile;
pub mod selected;
pub mod sprite;
pub mod team;
pub mod weapon;
pub mod zindex;
