use texture_shim::coords::{normalize_rect_coords, scale_npot_coords};
use texture_shim::gl::{self, GLint};
use texture_shim::{DriverCall, MAX_TEXTURE_UNITS, RecordingDriver, TextureContext};

fn context() -> TextureContext<RecordingDriver> {
    TextureContext::new(RecordingDriver::new())
}

#[test]
fn rebinding_reuses_the_record() {
    let mut ctx = context();
    ctx.bind_texture(gl::TEXTURE_2D, 5);
    ctx.tex_image_2d(
        gl::TEXTURE_2D,
        0,
        gl::RGBA as GLint,
        16,
        16,
        0,
        gl::RGBA,
        gl::UNSIGNED_BYTE,
        None,
    );
    ctx.bind_texture(gl::TEXTURE_2D, 0);
    assert!(ctx.registry().bound(0).is_none());

    ctx.bind_texture(gl::TEXTURE_2D, 5);
    assert_eq!(ctx.registry().len(), 1);
    let record = ctx.registry().bound(0).unwrap();
    assert_eq!(record.texture, 5);
    assert_eq!((record.width, record.height), (16, 16));
}

#[test]
fn bindings_are_per_unit() {
    let mut ctx = context();
    ctx.bind_texture(gl::TEXTURE_2D, 1);
    ctx.active_texture(gl::TEXTURE0 + 3);
    ctx.bind_texture(gl::TEXTURE_RECTANGLE_ARB, 2);
    ctx.tex_image_2d(
        gl::TEXTURE_RECTANGLE_ARB,
        0,
        gl::RGBA as GLint,
        3,
        3,
        0,
        gl::RGBA,
        gl::UNSIGNED_BYTE,
        None,
    );

    assert_eq!(ctx.registry().bound(0).unwrap().texture, 1);
    assert_eq!(ctx.registry().bound(3).unwrap().texture, 2);
    assert!(!ctx.registry().is_rectangle(0));
    assert!(ctx.registry().is_rectangle(3));
    assert_eq!(ctx.registry().get(2).unwrap().width, 3);
    assert!(!ctx.registry().get(1).unwrap().uploaded);

    let calls = ctx.driver_mut().take();
    assert_eq!(
        calls[..3],
        [
            DriverCall::BindTexture {
                target: gl::TEXTURE_2D,
                texture: 1
            },
            DriverCall::ActiveTexture(gl::TEXTURE0 + 3),
            DriverCall::BindTexture {
                target: gl::TEXTURE_2D,
                texture: 2
            },
        ]
    );
}

#[test]
fn delete_clears_every_unit() {
    let mut ctx = context();
    ctx.bind_texture(gl::TEXTURE_2D, 9);
    ctx.active_texture(gl::TEXTURE0 + 1);
    ctx.bind_texture(gl::TEXTURE_2D, 9);
    ctx.driver_mut().take();

    ctx.delete_textures(1, &[9]);
    assert!(ctx.registry().is_empty());
    assert!(ctx.registry().bound(0).is_none());
    assert!(ctx.registry().bound(1).is_none());
    assert_eq!(ctx.driver_mut().take(), vec![DriverCall::DeleteTextures(vec![9])]);
}

#[test]
fn deleting_unknown_names_still_forwards() {
    let mut ctx = context();
    ctx.bind_texture(gl::TEXTURE_2D, 1);
    ctx.driver_mut().take();
    ctx.delete_textures(2, &[40, 41, 1]);
    assert_eq!(ctx.registry().len(), 1);
    assert_eq!(ctx.driver_mut().take(), vec![DriverCall::DeleteTextures(vec![40, 41])]);
    assert_eq!(ctx.get_error(), gl::NO_ERROR);
}

#[test]
fn bad_delete_counts() {
    let mut ctx = context();
    ctx.delete_textures(-1, &[1]);
    assert_eq!(ctx.get_error(), gl::INVALID_VALUE);
    ctx.delete_textures(3, &[1, 2]);
    assert_eq!(ctx.get_error(), gl::INVALID_VALUE);
    assert!(ctx.driver().calls.is_empty());
}

#[test]
fn active_unit_out_of_range_is_unchanged() {
    let mut ctx = context();
    ctx.active_texture(gl::TEXTURE0 + 2);
    ctx.driver_mut().take();

    ctx.active_texture(gl::TEXTURE0 + MAX_TEXTURE_UNITS as u32);
    assert_eq!(ctx.registry().active_unit(), 2);
    assert_eq!(ctx.get_error(), gl::INVALID_ENUM);
    ctx.active_texture(gl::TEXTURE0 - 1);
    assert_eq!(ctx.registry().active_unit(), 2);
    assert_eq!(ctx.get_error(), gl::INVALID_ENUM);
    assert!(ctx.driver().calls.is_empty());

    ctx.active_texture(gl::TEXTURE0 + MAX_TEXTURE_UNITS as u32 - 1);
    assert_eq!(ctx.registry().active_unit(), MAX_TEXTURE_UNITS - 1);
}

#[test]
fn client_unit_forwards_only_changes() {
    let mut ctx = context();
    ctx.client_active_texture(gl::TEXTURE0);
    assert!(ctx.driver().calls.is_empty());

    ctx.client_active_texture(gl::TEXTURE0 + 1);
    ctx.client_active_texture(gl::TEXTURE0 + 1);
    assert_eq!(
        ctx.driver_mut().take(),
        vec![DriverCall::ClientActiveTexture(gl::TEXTURE0 + 1)]
    );
    assert_eq!(ctx.registry().client_active_unit(), 1);

    ctx.client_active_texture(gl::TEXTURE0 + 99);
    assert_eq!(ctx.get_error(), gl::INVALID_ENUM);
    assert_eq!(ctx.registry().client_active_unit(), 1);
    assert!(ctx.driver().calls.is_empty());
}

#[test]
fn first_error_sticks_until_read() {
    let mut ctx = context();
    ctx.active_texture(gl::TEXTURE0 + 100);
    ctx.delete_textures(-1, &[]);
    assert_eq!(ctx.get_error(), gl::INVALID_ENUM);
    assert_eq!(ctx.get_error(), gl::NO_ERROR);
}

#[test]
fn rectangle_coordinates_follow_bound_size() {
    let mut ctx = context();
    ctx.bind_texture(gl::TEXTURE_RECTANGLE_ARB, 4);
    ctx.tex_image_2d(
        gl::TEXTURE_RECTANGLE_ARB,
        0,
        gl::RGBA as GLint,
        40,
        20,
        0,
        gl::RGBA,
        gl::UNSIGNED_BYTE,
        None,
    );

    let unit = ctx.registry().active_unit();
    assert!(ctx.registry().is_rectangle(unit));
    let record = ctx.registry().bound(unit).unwrap();
    let mut coords = [40.0, 20.0, 10.0, 5.0];
    normalize_rect_coords(&mut coords, record.width, record.height);
    assert_eq!(coords, [1.0, 1.0, 0.25, 0.25]);

    let mut coords = [1.0, 1.0];
    scale_npot_coords(
        &mut coords,
        record.width,
        record.height,
        record.padded_width,
        record.padded_height,
    );
    assert_eq!(coords, [40.0 / 64.0, 20.0 / 32.0]);
}
