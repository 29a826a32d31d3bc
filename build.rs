fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 使用内置的 protoc，避免依赖系统安装
    if std::env::var_os("PROTOC").is_none() {
        let protoc = protoc_bin_vendored::protoc_bin_path()?;
        unsafe { std::env::set_var("PROTOC", protoc) };
    }

    tonic_prost_build::configure().compile_protos(
        &["proto/registry.proto", "proto/roominfo.proto"],
        &["proto"],
    )?;

    println!("cargo:rerun-if-changed=proto");
    Ok(())
}
