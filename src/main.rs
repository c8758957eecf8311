use stl_recreation::collections::contiguous::Array;
use stl_recreation::iter::RandomAccess;
use stl_recreation::ptr::UniquePtr;

#[derive(Debug)]
struct Noisy(u8);

impl Drop for Noisy {
    fn drop(&mut self) {
        println!("Dropped Noisy({})", self.0);
    }
}

fn main() {
    println!("\n[Array]\n");

    let mut arr: Array<i32, 5> = Array::from_list(&[1, 2, 3, 4, 5]);
    println!("{}", arr);
    println!("{:?}", arr.at(4));
    println!("{}", arr.at(5).unwrap_err());

    for value in arr.iter_rev() {
        print!("{} ", value);
    }
    println!();

    let (begin, end) = arr.bounds_mut();
    println!("end - begin = {}", end - begin);
    // SAFETY: begin + 2 is within the Array and no other reference to it is alive.
    unsafe { *(begin + 2).get() = 30 };
    println!("{:?}", arr);

    println!("\n[UniquePtr]\n");

    let mut ptr = UniquePtr::new(Noisy(1));
    println!("{:?}", ptr);
    ptr.replace(Noisy(2));

    let moved = ptr.take();
    println!("{:?}, {:?}", ptr, moved);

    let mut block = UniquePtr::<[i32]>::repeat_default(3);
    block[1] = 42;
    println!("{:?}", block);

    if let Some(raw) = block.release() {
        // SAFETY: raw was just released and nothing else owns it.
        drop(unsafe { UniquePtr::from_raw(raw.as_ptr()) });
    }
}
