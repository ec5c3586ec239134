//! Grid geometry and file readers for NICAM-style icosahedral
//! atmospheric-model output.
//!
//! NICAM discretizes the sphere by recursively subdividing a base
//! icosahedron; its output is stored either as one file per region (the
//! legacy format) or as one file per process holding several regions with a
//! self-describing header (panda). This crate decodes both, synthesizes
//! per-cell polygons from whichever cartesian arrays a grid source supplies,
//! and reads the numeric fields sampled at those cells.
//!
//! # Layout
//!
//! - [`dims`] — closed-form grid dimensions from the refinement parameters.
//! - [`vector`] and [`coord`] — 3-vector algebra and cartesian/lat-lon
//!   conversion on the sphere.
//! - [`grid`] — triangle-vertex synthesis, per-cell polygon assembly, and
//!   the legacy/NetCDF grid sources.
//! - [`field`] — the legacy/NetCDF/panda numeric field readers.
//! - [`panda`] — the panda container format, usable directly when a caller
//!   needs more than [`field::PandaFieldReader`]'s single-variable view
//!   (the full directory, cross-file validation, and so on).
//! - [`value`] — the dtype-tagged array [`value::GridArray`] every field
//!   reader returns.
//! - [`error`] — the crate's error taxonomy.

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unsafe_code,
    unused,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    variant_size_differences,
    warnings,
    clippy::all,
    clippy::cargo,
    clippy::pedantic,
    clippy::allow_attributes_without_reason,
    clippy::as_underscore,
    clippy::branches_sharing_code,
    clippy::clone_on_ref_ptr,
    clippy::cognitive_complexity,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::decimal_literal_representation,
    clippy::default_union_representation,
    clippy::derive_partial_eq_without_eq,
    clippy::empty_drop,
    clippy::empty_line_after_outer_attr,
    clippy::empty_structs_with_brackets,
    clippy::equatable_if_let,
    clippy::exit,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::format_push_string,
    clippy::future_not_send,
    clippy::get_unwrap,
    clippy::if_then_some_else_none,
    clippy::imprecise_flops,
    clippy::iter_on_empty_collections,
    clippy::iter_on_single_items,
    clippy::iter_with_drain,
    clippy::large_include_file,
    clippy::let_underscore_must_use,
    clippy::lossy_float_literal,
    clippy::mem_forget,
    clippy::missing_const_for_fn,
    clippy::mixed_read_write_in_expression,
    clippy::mutex_atomic,
    clippy::mutex_integer,
    clippy::needless_collect,
    clippy::non_send_fields_in_send_ty,
    clippy::nonstandard_macro_braces,
    clippy::option_if_let_else,
    clippy::or_fun_call,
    clippy::panic,
    clippy::path_buf_push_overwrite,
    clippy::pattern_type_mismatch,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::rc_buffer,
    clippy::rc_mutex,
    clippy::redundant_pub_crate,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::significant_drop_in_scrutinee,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_lit_as_bytes,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::todo,
    clippy::trailing_empty_array,
    clippy::trait_duplication_in_bounds,
    clippy::transmute_undefined_repr,
    clippy::trivial_regex,
    clippy::try_err,
    clippy::type_repetition_in_bounds,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unnecessary_self_imports,
    clippy::unneeded_field_pattern,
    clippy::unseparated_literal_suffix,
    clippy::unused_peekable,
    clippy::unused_rounding,
    clippy::unwrap_used,
    clippy::use_debug,
    clippy::use_self,
    clippy::useless_let_if_seq,
    clippy::verbose_file_reads
)]
#![allow(
    // "It requires the user to type the module name twice."
    // => not true here since internal modules are hidden from the users.
    clippy::module_name_repetitions,
    // Usually yes, but not really applicable for most literals in this crate.
    clippy::unreadable_literal,
)]

// }}}

pub mod coord;
pub mod dims;
pub mod error;
pub mod field;
pub mod grid;
mod io;
pub mod panda;
pub mod value;
pub mod vector;

// log for logging (optional). When the `logging` feature is off, the
// `log::warn!` call sites in `panda` compile away to nothing instead of
// needing to be conditionally compiled themselves.
#[cfg(feature = "logging")]
use log;

#[cfg(not(feature = "logging"))]
mod log {
    macro_rules! __warn__ ( ($($tt:tt)*) => {{}} );

    pub(crate) use __warn__ as warn;
}

pub use coord::LatLon;
pub use dims::GridDims;
pub use field::FieldReader;
pub use grid::{CellPolygon, GridSource, Region};
pub use panda::PandaReader;
pub use value::GridArray;
pub use vector::Vec3;

/// Default Earth radius, in meters, used when a caller does not supply one
/// of their own: the authalic radius NICAM's own tools use for area
/// calculations (`6371.01 x 10^3 m`).
pub const EARTH_RADIUS_M: f64 = 6_371_010.0;
