//! # squirreljme-hook
//!
//! Native half of `cc.squirreljme.jvm.Assembly` for running SquirrelJME
//! code on a host JVM.
//!
//! The library answers one question for Java code: how long is this array?
//! `Assembly.arrayLength` accepts any `Object` (or the object packed into a
//! `long`) and returns its element count if it is a `boolean[]`, `byte[]`,
//! `short[]`, `char[]`, `int[]`, `long[]`, `float[]`, `double[]` or any
//! reference array, and `-1` for everything else, `null` included.
//!
//! ## Loading
//!
//! ```java
//! System.loadLibrary("squirreljme_hook");
//! int n = Assembly.arrayLength(new int[5]); // 5
//! int m = Assembly.arrayLength("text");     // -1
//! ```
//!
//! On load the library prints `SquirrelJME Hook Loaded` on stderr and asks
//! for JNI 1.6. See [`config`] for the environment variables it reads.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Exported JNI symbols                     │
//! │   JNI_OnLoad, Assembly.arrayLength(Object / long)        │
//! ├─────────────────────────────────────────────────────────┤
//! │                    Resolver                              │
//! │   resolve / classify over ArrayKind::ALL                 │
//! ├─────────────────────────────────────────────────────────┤
//! │                 Host capability                          │
//! │   Host trait; JniHost on top of env::JniEnv              │
//! ├─────────────────────────────────────────────────────────┤
//! │                 Raw JNI (jni::sys)                       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`kind`] | The nine recognized array kinds and their signatures |
//! | [`resolver`] | Classification and length lookup |
//! | [`host`] | [`Host`] trait and the JNI implementation |
//! | [`env`] | Thin wrapper over the raw JNI function table |
//! | [`handle`] | `long` encoding of object references |
//! | [`exports`] | The `extern "system"` symbols |
//! | [`config`], [`logging`] | Environment configuration and tracing |
//!
//! ## Using the resolver without a JVM
//!
//! The resolver only talks to the host through [`Host`], so it can run
//! against anything that can look up a type, check an instance and read a
//! length:
//!
//! ```rust,ignore
//! use squirreljme_hook::{resolve, ArrayKind, Host};
//!
//! struct Fake;
//!
//! impl Host for Fake {
//!     type Value = (ArrayKind, i32);
//!     type Type = ArrayKind;
//!
//!     fn lookup_type(&self, signature: &str) -> Option<ArrayKind> {
//!         ArrayKind::from_signature(signature)
//!     }
//!     fn is_instance(&self, value: (ArrayKind, i32), ty: &ArrayKind) -> bool {
//!         value.0 == *ty
//!     }
//!     fn array_element_count(&self, value: (ArrayKind, i32)) -> Option<i32> {
//!         Some(value.1)
//!     }
//! }
//!
//! assert_eq!(resolve(&Fake, Some((ArrayKind::Int, 5))).length(), Some(5));
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod exports;
pub mod handle;
pub mod host;
pub mod kind;
pub mod logging;
pub mod resolver;

pub use error::{ConfigError, ParseKindError, ResolveError};
pub use host::{Host, JniHost};
pub use kind::ArrayKind;
pub use resolver::{classify, resolve, resolve_address, LengthResult};
