//! Year table for 唐, 天寶元年 to 廣德元年. Later years are not filled yet.

use super::RawYear::{self, Filled, Placeholder};

pub(crate) const START_YEAR: i32 = 742;

pub(crate) static TANG: &[RawYear] = &[
    Filled((742, 2, 10), "一月丁未 二月丙子 三月丙午 四月乙亥 五月甲辰 六月甲戌 七月癸卯 八月癸酉 九月壬寅 十月壬申 十一月壬寅 十二月壬申"),
    Filled((743, 1, 30), "一月辛丑 二月辛未 三月庚子 四月庚午 五月己亥 六月戊辰 七月戊戌 八月丁卯 九月丁酉 十月丙寅 十一月丙申 十二月丙寅 閏十二月丙申"),
    Filled((744, 2, 18), "一月乙丑 二月乙未 三月甲子 四月甲午 五月癸亥 六月壬辰 七月壬戌 八月辛卯 九月庚申 十月庚寅 十一月庚申 十二月己丑"),
    Filled((745, 2, 6), "一月己未 二月己丑 三月己未 四月戊子 五月戊午 六月丁亥 七月丙辰 八月丙戌 九月乙卯 十月甲申 十一月甲寅 十二月甲申"),
    Filled((746, 1, 26), "一月癸丑 二月癸未 三月癸丑 四月壬午 五月壬子 六月壬午 七月辛亥 八月庚辰 閏八月庚戌 九月己卯 十月己酉 十一月戊寅 十二月戊申"),
    Filled((747, 2, 14), "一月丁丑 二月丁未 三月丙子 四月丙午 五月丙子 六月乙巳 七月乙亥 八月甲辰 九月甲戌 十月癸卯 十一月癸酉 十二月壬寅"),
    Filled((748, 2, 4), "一月壬申 二月辛丑 三月辛未 四月庚子 五月庚午 六月己亥 七月己巳 八月己亥 九月戊辰 十月戊戌 十一月丁卯 十二月丁酉"),
    Filled((749, 1, 23), "一月丙寅 二月丙申 三月乙丑 四月甲午 閏四月甲子 五月癸巳 六月癸亥 七月癸巳 八月壬戌 九月壬辰 十月壬戌 十一月辛卯 十二月辛酉"),
    Filled((750, 2, 11), "一月庚寅 二月庚申 三月己丑 四月戊午 五月戊子 六月丁巳 七月丁亥 八月丙辰 九月丙戌 十月丙辰 十一月丙戌 十二月乙卯"),
    Filled((751, 2, 1), "一月乙酉 二月甲寅 三月甲申 四月癸丑 五月壬午 六月壬子 七月辛巳 八月辛亥 九月庚辰 十月庚戌 十一月庚辰 十二月己酉"),
    Filled((752, 1, 21), "一月己卯 二月己酉 閏二月戊寅 三月戊申 四月丁丑 五月丙午 六月丙子 七月乙巳 八月甲戌 九月甲辰 十月甲戌 十一月癸卯 十二月癸酉"),
    Filled((753, 2, 8), "一月癸卯 二月癸酉 三月壬寅 四月壬申 五月辛丑 六月庚午 七月庚子 八月己巳 九月戊戌 十月戊辰 十一月戊戌 十二月丁卯"),
    Filled((754, 1, 28), "一月丁酉 二月丁卯 三月丁酉 四月丙寅 五月丙申 六月乙丑 七月甲午 八月甲子 九月癸巳 十月壬戌 閏十月壬辰 十一月辛酉 十二月辛卯"),
    Filled((755, 2, 16), "一月辛酉 二月辛卯 三月庚申 四月庚寅 五月己未 六月己丑 七月戊午 八月戊子 九月丁巳 十月丁亥 十一月丙辰 十二月乙酉"),
    Filled((756, 2, 5), "一月乙卯 二月乙酉 三月甲寅 四月甲申 五月甲寅 六月癸未 七月癸丑 八月壬午 九月壬子 十月辛巳 十一月辛亥 十二月庚辰"),
    Filled((757, 1, 25), "一月庚戌 二月己卯 三月戊申 四月戊寅 五月戊申 六月丁丑 閏六月丁未 七月丙子 八月丙午 九月丙子 十月乙巳 十一月乙亥 十二月甲辰"),
    Filled((758, 2, 13), "一月甲戌 二月癸卯 三月壬申 四月壬寅 五月辛未 六月辛丑 七月庚午 八月庚子 九月庚午 十月庚子 十一月己巳 十二月己亥"),
    Filled((759, 2, 2), "一月戊辰 二月戊戌 三月丁卯 四月丙申 五月丙寅 六月乙未 七月乙丑 八月甲午 九月甲子 十月甲午 十一月癸亥 十二月癸巳"),
    Filled((760, 1, 23), "一月癸亥 二月壬辰 三月壬戌 閏三月辛卯 四月庚申 五月庚寅 六月己未 七月戊子 八月戊午 九月戊子 十月丁巳 十一月丁亥 十二月丁巳"),
    Filled((761, 2, 10), "一月丁亥 二月丙辰 三月丙戌 四月乙卯 五月甲申 六月甲寅 七月癸未 八月壬子 九月壬午 十月辛亥"),
    Filled((761, 12, 1), "建子月辛巳 建丑月辛亥 建寅月辛巳 建卯月辛亥 建辰月庚辰 四月庚戌 五月己卯 六月戊申 七月戊寅 八月丁未 九月丙子 十月丙午 十一月乙亥 十二月乙巳"),
    Filled((763, 1, 19), "一月乙亥 閏一月乙巳 二月甲戌 三月甲辰 四月癸酉 五月癸卯 六月壬申 七月壬寅 八月辛未 九月庚子 十月庚午 十一月己亥 十二月己巳"),
    // 廣德二年 onward
    Placeholder,
    Placeholder,
    Placeholder,
    Placeholder,
    Placeholder,
    Placeholder,
    Placeholder,
    Placeholder,
    Placeholder,
    Placeholder,
    Placeholder,
    Placeholder,
    Placeholder,
    Placeholder,
    Placeholder,
    Placeholder,
];
