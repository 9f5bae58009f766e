/// Illustrative strategy offered by the "Load Sample Strategy" action.
pub const SAMPLE_STRATEGY: &str = r#"// Sample simplified strategy for demo
public class SimpleMAStrategy : Strategy
{
    public int FastMA { get; set; } = 10;
    public int SlowMA { get; set; } = 20;
    public int StopLoss { get; set; } = 50;

    protected override void OnBarUpdate()
    {
        if (CrossAbove(EMA(FastMA), EMA(SlowMA), 1))
            EnterLong();
        if (CrossBelow(EMA(FastMA), EMA(SlowMA), 1))
            EnterShort();
    }
}
"#;
