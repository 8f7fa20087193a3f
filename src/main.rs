use anyhow::Result;
use structopt::StructOpt;
use api_probe::function::prober::run_probe;
use api_probe::function::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 解析命令行参数
    let config = Config::from_args();

    // 2. 执行探测
    let _report = run_probe(config).await?;

    // 3. 显示摘要
    println!("探测完成！");
    Ok(())
}
