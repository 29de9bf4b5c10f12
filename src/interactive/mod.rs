//
//  wikitude-cli
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive terminal prompts.
//!
//! Prompts are only shown in a terminal session; commands that need input
//! in a non-interactive session fail with a hint instead of blocking.

pub mod prompt;

pub use prompt::*;
