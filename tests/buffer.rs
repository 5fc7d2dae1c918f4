use fourier_transform::{
    fast_fourier_transform, CRelease, Error, ReleaseFn, Signal, Spectrum, UniqueBuffer,
};
use num_complex::Complex;
use std::cell::RefCell;
use std::ptr::NonNull;
use std::rc::Rc;

fn malloc_signal(values: &[f32]) -> UniqueBuffer<f32, CRelease> {
    let bytes = std::mem::size_of::<f32>() * values.len().max(1);
    let data = NonNull::new(unsafe { libc::malloc(bytes) } as *mut f32).expect("malloc failed");
    unsafe {
        std::ptr::copy_nonoverlapping(values.as_ptr(), data.as_ptr(), values.len());
        UniqueBuffer::from_raw_parts(data, values.len(), CRelease)
    }
}

#[test]
fn transforms_foreign_memory() {
    let signal = malloc_signal(&[1.0, 0.0, -1.0, 0.0]);
    let spectrum = fast_fourier_transform(&signal).unwrap();
    assert!((spectrum[1] - Complex::new(2.0, 0.0)).norm() < 1e-6);
    assert!((spectrum[3] - Complex::new(2.0, 0.0)).norm() < 1e-6);
}

#[test]
fn copy_of_foreign_memory_uses_default_release() {
    let signal = malloc_signal(&[3.0, 4.0]);
    let copy: Signal = signal.copy();
    drop(signal);
    assert_eq!(copy.as_slice(), &[3.0, 4.0]);
}

#[test]
fn release_receives_original_storage() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let values = vec![1u8, 2, 3].into_boxed_slice();
    let len = values.len();
    let data = NonNull::from(Box::leak(values)).cast::<u8>();

    let recorder = log.clone();
    let release = ReleaseFn(move |data: NonNull<u8>, len: usize| {
        recorder.borrow_mut().push((data.as_ptr() as usize, len));
        unsafe {
            drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                data.as_ptr(),
                len,
            )))
        };
    });

    let mut buffer = unsafe { UniqueBuffer::from_raw_parts(data, len, release) };
    let moved = buffer.take();
    drop(buffer);
    assert!(log.borrow().is_empty());
    drop(moved);
    assert_eq!(log.borrow().as_slice(), &[(data.as_ptr() as usize, 3)]);
}

#[test]
fn spectrum_bounds_are_checked() {
    let spectrum: Spectrum = fast_fourier_transform(&[1.0f32, 1.0]).unwrap();
    assert!(spectrum.at(1).is_ok());
    assert_eq!(
        spectrum.at(2).unwrap_err(),
        Error::OutOfRange { index: 2, size: 2 }
    );
}

#[test]
fn moved_buffer_keeps_contents() {
    fn consume(buffer: Signal) -> usize {
        buffer.size()
    }

    let buffer = Signal::from_slice(&[0.0, 1.0, 2.0]);
    let moved = buffer;
    assert_eq!(moved.as_slice(), &[0.0, 1.0, 2.0]);
    assert_eq!(consume(moved), 3);
}
