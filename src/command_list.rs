// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Recorded texture state calls.

While a list is being compiled, state calls are stored here instead of
executed.  Replaying the list runs them through the context's entry points
in order.
*/

use crate::gl::{GLenum, GLfloat, GLint, GLuint};

#[derive(Debug, Clone, PartialEq)]
pub enum TextureCommand {
    BindTexture { target: GLenum, texture: GLuint },
    ActiveTexture(GLenum),
    ClientActiveTexture(GLenum),
    TexParameteri { target: GLenum, pname: GLenum, param: GLint },
    TexEnvf { target: GLenum, pname: GLenum, param: GLfloat },
    DeleteTextures(Vec<GLuint>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandList {
    commands: Vec<TextureCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: TextureCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[TextureCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
