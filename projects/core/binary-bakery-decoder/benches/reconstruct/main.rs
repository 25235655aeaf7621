use binary_bakery_decoder::{
    decode_into_slice, decode_to_array, decode_to_vec, read_header, reconstruct, Header,
    PayloadType,
};
use core::hint::black_box;
use core::time::Duration;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const WIDTH: u16 = 1024;
const HEIGHT: u16 = 1024;
const PIXELS: usize = WIDTH as usize * HEIGHT as usize;

// Small enough for the fixed-capacity result to live on the stack.
const PLAIN_WIDTH: u16 = 128;
const PLAIN_HEIGHT: u16 = 128;
const PLAIN_PIXELS: usize = PLAIN_WIDTH as usize * PLAIN_HEIGHT as usize;

fn indexed_payload() -> Vec<u64> {
    let header = Header {
        payload_type: PayloadType::DualImage,
        bpp: 4,
        bit_count: PIXELS as u32,
        width: WIDTH,
        height: HEIGHT,
        color0: 0xFF00_00FF,
        color1: 0xFFFF_FFFF,
    };
    let mut words = header.to_words().to_vec();
    // Alternating pattern so the branch in the kernel can't be predicted away.
    words.extend((0..PIXELS / 64).map(|index| 0x5A5A_5A5A_A5A5_A5A5u64.rotate_left(index as u32)));
    words
}

fn plain_payload() -> Vec<u64> {
    let header = Header {
        payload_type: PayloadType::Image,
        bpp: 4,
        bit_count: (PLAIN_PIXELS * 4 * 8) as u32,
        width: PLAIN_WIDTH,
        height: PLAIN_HEIGHT,
        ..Header::default()
    };
    let mut words = header.to_words().to_vec();
    words.extend((0..PLAIN_PIXELS / 2).map(|index| index as u64));
    words
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Indexed Image Reconstruction");
    group.throughput(Throughput::Elements(PIXELS as u64));
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(5));

    let indexed = indexed_payload();
    let bitmap: &[u8] = bytemuck::cast_slice(&indexed[3..]);
    let mut output = vec![0u32; PIXELS];

    group.bench_function("reconstruct", |b| {
        b.iter(|| reconstruct(black_box(bitmap), &mut output, 0xFF00_00FF, 0xFFFF_FFFF))
    });
    group.bench_function("decode_to_vec", |b| {
        b.iter(|| decode_to_vec::<u32>(black_box(&indexed)).unwrap())
    });
    group.bench_function("decode_into_slice", |b| {
        b.iter(|| decode_into_slice::<u32>(black_box(&indexed), &mut output).unwrap())
    });
    group.finish();

    let mut group = c.benchmark_group("Plain Image Delivery");
    group.throughput(Throughput::Bytes((PLAIN_PIXELS * 4) as u64));

    let plain = plain_payload();
    let header = read_header(&plain).unwrap();
    group.bench_function("decode_to_array (in place)", |b| {
        b.iter(|| {
            decode_to_array::<u32, PLAIN_PIXELS>(black_box(&plain), &header)
                .unwrap()
                .is_borrowed()
        })
    });
    group.bench_function("decode_to_vec", |b| {
        b.iter(|| decode_to_vec::<u32>(black_box(&plain)).unwrap())
    });
    group.bench_function("decode_into_slice", |b| {
        b.iter(|| decode_into_slice::<u32>(black_box(&plain), &mut output).unwrap())
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
