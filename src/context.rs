// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
The texturing half of a graphics context.

[TextureContext] owns everything the texture entry points read or write:
the texture registry, unpack state, the error flag, the debug configuration
and the driver calls are forwarded to.  Entry points take the same
arguments as their legacy counterparts and report failures through
[TextureContext::get_error], the way the legacy API does.

Contexts are not shared between threads; an embedder with several threads
must serialize access itself.
*/

use crate::Error;
use crate::command_list::{CommandList, TextureCommand};
use crate::config::Config;
use crate::convert::{PixelConverter, PixelDumper, Unconverting};
use crate::driver::Driver;
use crate::error::ErrorFlag;
use crate::gl::{self, GLboolean, GLclampf, GLenum, GLfloat, GLint, GLsizei, GLuint, GlEnum};
use crate::pixel_formats::PngDumper;
use crate::registry::TextureRegistry;
use crate::unpack::UnpackConfig;
use std::fmt::{Debug, Formatter};

pub struct TextureContext<D: Driver = crate::imp::DefaultDriver> {
    pub(crate) driver: D,
    pub(crate) registry: TextureRegistry,
    pub(crate) unpack: UnpackConfig,
    errors: ErrorFlag,
    pub(crate) config: Config,
    pub(crate) converter: Box<dyn PixelConverter>,
    pub(crate) dumper: Box<dyn PixelDumper>,
    in_begin_end: bool,
    compiling: Option<CommandList>,
}

impl<D: Driver + Debug> Debug for TextureContext<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureContext")
            .field("driver", &self.driver)
            .field("registry", &self.registry)
            .field("unpack", &self.unpack)
            .field("errors", &self.errors)
            .field("config", &self.config)
            .field("in_begin_end", &self.in_begin_end)
            .field("compiling", &self.compiling)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "backend_gles")]
impl TextureContext<crate::imp::GlesDriver> {
    /// Loads the default GLES library and reads [Config] from the environment.
    pub fn open_default() -> Result<Self, Error> {
        let driver = crate::imp::GlesDriver::open_default()?;
        Ok(Self::with_config(driver, Config::from_env()))
    }
}

impl<D: Driver> TextureContext<D> {
    /// A context with every debug hook off and no pixel converter.
    pub fn new(driver: D) -> Self {
        Self::with_config(driver, Config::default())
    }

    pub fn with_config(driver: D, config: Config) -> Self {
        let dumper = PngDumper::new(config.dump_dir.clone());
        Self {
            driver,
            registry: TextureRegistry::new(),
            unpack: UnpackConfig::default(),
            errors: ErrorFlag::default(),
            config,
            converter: Box::new(Unconverting),
            dumper: Box::new(dumper),
            in_begin_end: false,
            compiling: None,
        }
    }

    pub fn with_converter(mut self, converter: impl PixelConverter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }

    pub fn with_dumper(mut self, dumper: impl PixelDumper + 'static) -> Self {
        self.dumper = Box::new(dumper);
        self
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    pub fn registry(&self) -> &TextureRegistry {
        &self.registry
    }

    pub fn unpack(&self) -> &UnpackConfig {
        &self.unpack
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns and clears the first error raised since the last call.
    pub fn get_error(&mut self) -> GLenum {
        self.errors.take()
    }

    /// Marks whether the application is between begin and end.
    pub fn set_in_begin_end(&mut self, in_begin_end: bool) {
        self.in_begin_end = in_begin_end;
    }

    pub(crate) fn check_outside_block(&self, call: &'static str) -> Result<(), Error> {
        if self.in_begin_end {
            Err(Error::InsideBeginEnd { call })
        } else {
            Ok(())
        }
    }

    /// Logs `err` and raises its error code, if it has one.
    pub(crate) fn report(&mut self, call: &'static str, err: Error) {
        match err.gl_code() {
            Some(code) => {
                logwise::warn_sync!(
                    "{call}: {err}",
                    call = call,
                    err = logwise::privacy::LogIt(&err)
                );
                self.errors.set(code);
            }
            None => {
                logwise::info_sync!(
                    "{call} skipped: {err}",
                    call = call,
                    err = logwise::privacy::LogIt(&err)
                );
            }
        }
    }

    /// Stores `command` in the list being compiled.  Returns false when no
    /// list is open and the call should run now.
    fn compile(&mut self, command: impl FnOnce() -> TextureCommand) -> bool {
        match self.compiling.as_mut() {
            Some(list) => {
                list.push(command());
                true
            }
            None => false,
        }
    }

    /// Starts recording state calls instead of running them.
    pub fn begin_list(&mut self) {
        if self.compiling.is_some() {
            self.errors.set(gl::INVALID_OPERATION);
            logwise::warn_sync!("begin_list: a list is already being compiled");
            return;
        }
        self.compiling = Some(CommandList::new());
    }

    /// Stops recording and returns what was recorded.
    pub fn end_list(&mut self) -> Option<CommandList> {
        let list = self.compiling.take();
        if list.is_none() {
            self.errors.set(gl::INVALID_OPERATION);
            logwise::warn_sync!("end_list: no list is being compiled");
        }
        list
    }

    /// Replays a recorded list through the entry points.
    pub fn call_list(&mut self, list: &CommandList) {
        for command in list.commands() {
            match command {
                TextureCommand::BindTexture { target, texture } => {
                    self.bind_texture(*target, *texture)
                }
                TextureCommand::ActiveTexture(unit) => self.active_texture(*unit),
                TextureCommand::ClientActiveTexture(unit) => self.client_active_texture(*unit),
                TextureCommand::TexParameteri {
                    target,
                    pname,
                    param,
                } => self.tex_parameteri(*target, *pname, *param),
                TextureCommand::TexEnvf {
                    target,
                    pname,
                    param,
                } => self.tex_envf(*target, *pname, *param),
                TextureCommand::DeleteTextures(textures) => {
                    self.delete_textures(textures.len() as GLsizei, textures)
                }
            }
        }
    }

    pub fn pixel_storei(&mut self, pname: GLenum, param: GLint) {
        if let Err(err) = self.pixel_storei_inner(pname, param) {
            self.report("pixel_storei", err);
        }
    }

    fn pixel_storei_inner(&mut self, pname: GLenum, param: GLint) -> Result<(), Error> {
        let invalid = Error::InvalidPixelStore {
            pname: GlEnum(pname),
            param,
        };
        match pname {
            gl::UNPACK_ROW_LENGTH | gl::UNPACK_SKIP_PIXELS | gl::UNPACK_SKIP_ROWS if param < 0 => {
                return Err(invalid);
            }
            gl::UNPACK_ROW_LENGTH => self.unpack.row_length = param,
            gl::UNPACK_SKIP_PIXELS => self.unpack.skip_pixels = param,
            gl::UNPACK_SKIP_ROWS => self.unpack.skip_rows = param,
            gl::UNPACK_LSB_FIRST => self.unpack.lsb_first = param != 0,
            gl::UNPACK_ALIGNMENT => {
                if !matches!(param, 1 | 2 | 4 | 8) {
                    return Err(invalid);
                }
                self.unpack.alignment = param;
                self.driver.pixel_storei(pname, param);
            }
            _ => self.driver.pixel_storei(pname, param),
        }
        Ok(())
    }

    pub fn bind_texture(&mut self, target: GLenum, texture: GLuint) {
        if self.compile(|| TextureCommand::BindTexture { target, texture }) {
            return;
        }
        if let Err(err) = self.check_outside_block("bind_texture") {
            self.report("bind_texture", err);
            return;
        }
        self.registry.bind(target, texture);
        self.driver.bind_texture(gl::map_tex_target(target), texture);
    }

    pub fn active_texture(&mut self, texture: GLenum) {
        if self.compile(|| TextureCommand::ActiveTexture(texture)) {
            return;
        }
        match self.registry.set_active_unit(texture) {
            Ok(()) => self.driver.active_texture(texture),
            Err(err) => self.report("active_texture", err),
        }
    }

    pub fn client_active_texture(&mut self, texture: GLenum) {
        if self.compile(|| TextureCommand::ClientActiveTexture(texture)) {
            return;
        }
        match self.registry.set_client_active_unit(texture) {
            Ok(true) => self.driver.client_active_texture(texture),
            Ok(false) => {}
            Err(err) => self.report("client_active_texture", err),
        }
    }

    pub fn tex_parameteri(&mut self, target: GLenum, pname: GLenum, param: GLint) {
        if self.compile(|| TextureCommand::TexParameteri {
            target,
            pname,
            param,
        }) {
            return;
        }
        if let Err(err) = self.check_outside_block("tex_parameteri") {
            self.report("tex_parameteri", err);
            return;
        }
        let wrap = matches!(pname, gl::TEXTURE_WRAP_S | gl::TEXTURE_WRAP_T | gl::TEXTURE_WRAP_R);
        let param = if wrap && param == gl::CLAMP as GLint {
            gl::CLAMP_TO_EDGE as GLint
        } else {
            param
        };
        self.driver
            .tex_parameteri(gl::map_tex_target(target), pname, param);
    }

    pub fn tex_envf(&mut self, target: GLenum, pname: GLenum, param: GLfloat) {
        if let Err(err) = self.check_outside_block("tex_envf") {
            self.report("tex_envf", err);
            return;
        }
        if self.compile(|| TextureCommand::TexEnvf {
            target,
            pname,
            param,
        }) {
            return;
        }
        self.driver.tex_envf(target, pname, param);
    }

    /// Checks a legacy `(n, names)` pair and returns the names it covers.
    fn counted<'a, T>(n: GLsizei, values: &'a [T]) -> Result<&'a [T], Error> {
        if n < 0 {
            return Err(Error::NegativeCount(n));
        }
        values.get(..n as usize).ok_or(Error::CountExceedsSupplied {
            count: n,
            supplied: values.len(),
        })
    }

    /// Deletes the first `n` textures of `textures`.
    ///
    /// Names never bound are ignored here but still passed to the driver.
    pub fn delete_textures(&mut self, n: GLsizei, textures: &[GLuint]) {
        let textures = match Self::counted(n, textures) {
            Ok(textures) => textures,
            Err(err) => {
                self.report("delete_textures", err);
                return;
            }
        };
        if self.compile(|| TextureCommand::DeleteTextures(textures.to_vec())) {
            return;
        }
        self.registry.delete(textures);
        self.driver.delete_textures(textures);
    }

    /// Every texture is always resident.  `residences` is never written.
    pub fn are_textures_resident(
        &mut self,
        n: GLsizei,
        textures: &[GLuint],
        _residences: &mut [GLboolean],
    ) -> GLboolean {
        let result = self
            .check_outside_block("are_textures_resident")
            .and_then(|()| Self::counted(n, textures).map(|_| ()));
        match result {
            Ok(()) => gl::TRUE,
            Err(err) => {
                self.report("are_textures_resident", err);
                gl::FALSE
            }
        }
    }

    /// Priorities have no meaning to the driver; only the arguments are checked.
    pub fn prioritize_textures(
        &mut self,
        n: GLsizei,
        textures: &[GLuint],
        priorities: &[GLclampf],
    ) {
        let result = self
            .check_outside_block("prioritize_textures")
            .and_then(|()| Self::counted(n, textures).map(|_| ()))
            .and_then(|()| Self::counted(n, priorities).map(|_| ()));
        if let Err(err) = result {
            self.report("prioritize_textures", err);
        }
    }
}
